use crate::cli::{Cli, Command};
use crate::error::Result;

pub mod check;
pub mod edit;
mod input;

/// サブコマンドを実行し、終了コードを返す
pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Edit(args) => edit::run(args),
        Command::Check(args) => check::run(args),
    }
}
