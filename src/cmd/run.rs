use crate::reports;
use clap::Args;
use matchboard::engine::BoardEngine;
use matchboard::error::BoardResult;
use matchboard::script::{self, ScriptOp};
use std::fs;
use std::io::Read;
use std::process;
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Script file; reads stdin when omitted.
    pub script: Option<String>,

    /// Print the board after every operation.
    #[arg(long, default_value_t = false)]
    pub trace: bool,
}

pub fn run(args: RunArgs, mut engine: BoardEngine) {
    let text = match read_script(&args) {
        Ok(text) => text,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = execute(&text, &mut engine, args.trace) {
        error!("{}", e);
        process::exit(1);
    }
}

fn read_script(args: &RunArgs) -> BoardResult<String> {
    match &args.script {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn execute(text: &str, engine: &mut BoardEngine, trace: bool) -> BoardResult<()> {
    let ops = script::parse_script(text)?;

    for op in &ops {
        if let ScriptOp::Show = op {
            reports::print_board(engine);
            continue;
        }
        script::apply(engine, op)?;
        if trace {
            reports::print_board(engine);
        }
    }

    reports::print_board(engine);
    Ok(())
}
