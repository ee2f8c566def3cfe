// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation for the hs CLI.
//!
//! ```bash
//! hs completions bash > ~/.local/share/bash-completion/completions/hs
//! hs completions zsh > ~/.zfunc/_hs
//! hs completions fish > ~/.config/fish/completions/hs.fish
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

pub fn generate_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "hs", &mut io::stdout());
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
