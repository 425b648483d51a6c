mod error;

use deriv_compute::{
    numerical::{ctxt::Ctxt, eval::Eval},
    symbolic::{derivative, simplify, Expr},
};
use deriv_parser::parser::{expr::Expr as AstExpr, Parser};
use error::CliError;
use std::env;
use std::process::ExitCode;

const USAGE: &str = "\
usage: deriv-rs --eval <expression> [name=value ...]
       deriv-rs --diff <expression> --by <variable>";

/// Parses the given input into an expression AST.
fn parse_expr(input: &str) -> Result<AstExpr, CliError> {
    let mut parser = Parser::new(input).map_err(|err| CliError::source(input, err))?;
    parser
        .try_parse_full::<AstExpr>()
        .map_err(|err| CliError::source(input, err))
}

/// Evaluates the expression with the given `name=value` bindings and returns the result as text.
fn eval_command(input: &str, bindings: &[String]) -> Result<String, CliError> {
    let ast = parse_expr(input)?;

    let mut ctxt = Ctxt::new();
    for binding in bindings {
        let Some((name, value)) = binding.split_once('=') else {
            return Err(CliError::Usage(format!(
                "malformed binding `{}`; expected `name=value`",
                binding,
            )));
        };
        let value: f64 = value.parse().map_err(|_| {
            CliError::Usage(format!("binding `{}` has a non-numeric value", binding))
        })?;
        ctxt.add_var(name, value);
    }

    let result = ast.eval(&ctxt).map_err(|err| CliError::source(input, err))?;
    Ok(result.to_string())
}

/// Differentiates the expression with respect to `var`, simplifies the result, and renders it.
fn diff_command(input: &str, var: &str) -> Result<String, CliError> {
    let ast = parse_expr(input)?;
    let deriv = derivative(&Expr::from(ast), var);
    let simplified = simplify(&deriv).map_err(|err| CliError::source(input, err))?;
    Ok(simplified.to_string())
}

/// Dispatches on the given arguments (not including the program name) and returns the output to
/// print on success.
fn run(args: &[String]) -> Result<String, CliError> {
    match args.first().map(|arg| arg.as_str()) {
        Some("--eval") => match args.get(1) {
            Some(input) => eval_command(input, &args[2..]),
            None => Err(CliError::Usage(USAGE.to_string())),
        },
        Some("--diff") => match (args.get(1), args.get(2).map(|arg| arg.as_str()), args.get(3)) {
            (Some(input), Some("--by"), Some(var)) if args.len() == 4 => {
                diff_command(input, var)
            },
            _ => Err(CliError::Usage(USAGE.to_string())),
        },
        _ => Err(CliError::Usage(USAGE.to_string())),
    }
}

fn main() -> ExitCode {
    let args = env::args().skip(1).collect::<Vec<_>>();
    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        },
        Err(err) => {
            err.report_to_stderr();
            ExitCode::FAILURE
        },
    }
}
