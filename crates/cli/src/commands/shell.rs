//! Interactive question loop.
//!
//! Each input line is a form submission; a few slash commands stand in for
//! the page's other controls.

use crate::page::TerminalPage;
use clap::Args;
use lexask_api::create_client;
use lexask_controller::{AskController, ControllerOptions, Page, SubmitOutcome};
use lexask_core::{config::AppConfig, AppResult};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Ask questions interactively
#[derive(Args, Debug)]
pub struct ShellCommand {
    /// Start with compare mode on
    #[arg(short, long)]
    pub compare: bool,
}

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Question(&'a str),
    ToggleCompare,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        "/compare" => Input::ToggleCompare,
        "/help" => Input::Help,
        "/quit" | "/exit" => Input::Quit,
        _ => Input::Question(line),
    }
}

const HELP: &str = "输入问题后回车提交。/compare 切换对比模式，/help 显示帮助，/quit 退出。";

impl ShellCommand {
    /// Execute the shell command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing shell command");

        let api = create_client(config)?;
        let page = Arc::new(TerminalPage::new(self.compare || config.compare));
        let controller =
            AskController::attach(page.clone(), api, ControllerOptions::from_config(config))?;

        eprintln!("{}", HELP);
        eprintln!("例如：{}", page.placeholder());

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            match parse_input(&line) {
                Input::Quit => break,
                Input::Help => eprintln!("{}", HELP),
                Input::ToggleCompare => {
                    let checked = !page.compare_checked();
                    page.set_compare_checked(checked);
                    controller.toggle_compare();
                    eprintln!("对比模式：{}", if checked { "开启" } else { "关闭" });
                }
                Input::Question(question) => {
                    page.set_question(question);
                    if let SubmitOutcome::Failed(err) = controller.submit().await {
                        tracing::debug!("Submission failed: {}", err);
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_input("/compare"), Input::ToggleCompare);
        assert_eq!(parse_input("  /quit  "), Input::Quit);
        assert_eq!(parse_input("/exit"), Input::Quit);
        assert_eq!(parse_input("/help"), Input::Help);
    }

    #[test]
    fn test_other_lines_are_questions_verbatim() {
        assert_eq!(
            parse_input("什么是民事诉讼？"),
            Input::Question("什么是民事诉讼？")
        );
        // Empty lines still go through submission, which rejects them
        assert_eq!(parse_input("   "), Input::Question("   "));
    }
}
