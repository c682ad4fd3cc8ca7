use std::io::IsTerminal;

use bitcalc_core::{
    session::prelude::{ErrorStyle, Session, PROMPT},
    utils::prelude::{Error, WarningEmitter}
};

/// Interactive session on stdin. The prompt is only shown on a terminal.
pub fn start(warnings: WarningEmitter, style: ErrorStyle) -> Result<(), Error> {
    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal().then_some(PROMPT);

    Session::new(warnings)
        .with_style(style)
        .run(stdin.lock(), std::io::stdout().lock(), prompt)
}
