//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TaskFlowError;

/// Execute the completions command.
///
/// # Errors
///
/// Returns `TaskFlowError::Parse` if the generated script is not UTF-8.
pub fn completions(shell: Shell, install: bool) -> Result<String, TaskFlowError> {
    if install {
        return Ok(install_instructions(shell));
    }
    generate_completions(shell)
}

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `TaskFlowError::Parse` if the generated script is not UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, TaskFlowError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "taskflow", &mut buf);
    String::from_utf8(buf).map_err(|e| TaskFlowError::Parse(format!("UTF-8 error: {e}")))
}

fn install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc:
source <(taskflow completions bash)
"
        .to_string(),
        Shell::Zsh => r"# Save to your fpath, then run compinit:
taskflow completions zsh > ~/.zsh/completions/_taskflow
"
        .to_string(),
        Shell::Fish => r"# Save to the fish completions directory:
taskflow completions fish > ~/.config/fish/completions/taskflow.fish
"
        .to_string(),
        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
taskflow completions powershell | Out-String | Invoke-Expression
"
        .to_string(),
        Shell::Elvish => r"# Save to ~/.elvish/lib and add `use taskflow` to rc.elv:
taskflow completions elvish > ~/.elvish/lib/taskflow.elv
"
        .to_string(),
        _ => format!("# Redirect `taskflow completions {shell}` to your shell's completion directory\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bash_completions() {
        let script = generate_completions(Shell::Bash).unwrap();
        assert!(script.contains("taskflow"));
        assert!(script.contains("complete"));
    }

    #[test]
    fn test_generate_fish_completions_lists_subcommands() {
        let script = generate_completions(Shell::Fish).unwrap();
        assert!(script.contains("settings"));
        assert!(script.contains("stats"));
    }

    #[test]
    fn test_install_instructions() {
        let text = completions(Shell::Zsh, true).unwrap();
        assert!(text.contains("_taskflow"));
        assert!(!completions(Shell::Bash, true).unwrap().is_empty());
    }
}
