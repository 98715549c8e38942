use anyhow::{bail, Result};
use fusuma_proto::Command;

use crate::core::{ClassHint, ScreenId, WindowId};

/// One line of a replay script.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptLine {
    Command(Command),
    Manage {
        window_id: WindowId,
        screen: ScreenId,
        hint: ClassHint,
        title: String,
    },
    Unmanage {
        window_id: WindowId,
    },
}

/// Parses a script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ScriptLine>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let args: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    let rest = &args[1..];

    match args[0].as_str() {
        "manage" => {
            if rest.len() < 4 {
                bail!("Usage: manage <id> <screen> <class> <instance> [title...]");
            }
            Ok(Some(ScriptLine::Manage {
                window_id: rest[0].parse()?,
                screen: rest[1].parse()?,
                hint: ClassHint {
                    class: hint_part(&rest[2]),
                    instance: hint_part(&rest[3]),
                },
                title: rest[4..].join(" "),
            }))
        }
        "unmanage" => {
            if rest.is_empty() {
                bail!("Usage: unmanage <id>");
            }
            Ok(Some(ScriptLine::Unmanage {
                window_id: rest[0].parse()?,
            }))
        }
        _ => parse_command(&args).map(|cmd| Some(ScriptLine::Command(cmd))),
    }
}

// "-" marks a class hint part the window system did not report.
fn hint_part(s: &str) -> Option<String> {
    (s != "-").then(|| s.to_string())
}

pub fn parse_command(args: &[String]) -> Result<Command> {
    if args.is_empty() {
        bail!("No command provided");
    }

    let cmd = args[0].as_str();
    let rest = &args[1..];

    match cmd {
        "view" => Ok(Command::View {
            tag: rest.first().cloned(),
        }),
        "toggle-view" => {
            if rest.is_empty() {
                bail!("Usage: toggle-view <tag>");
            }
            Ok(Command::ToggleView {
                tag: Some(rest[0].clone()),
            })
        }
        "view-prev-selected" => Ok(Command::ViewPrevSelected),
        "view-next" => Ok(Command::ViewNext),
        "view-prev" => Ok(Command::ViewPrev),
        "tag" => Ok(Command::Tag {
            tag: rest.first().cloned(),
        }),
        "toggle-tag" => {
            if rest.is_empty() {
                bail!("Usage: toggle-tag <tag>");
            }
            Ok(Command::ToggleTag {
                tag: Some(rest[0].clone()),
            })
        }
        "toggle-floating" => Ok(Command::ToggleFloating),
        "focus" => {
            if rest.is_empty() {
                bail!("Usage: focus <window-id>");
            }
            let window: u32 = rest[0].parse()?;
            Ok(Command::Focus { window })
        }
        "focus-screen" => {
            if rest.is_empty() {
                bail!("Usage: focus-screen <screen-id>");
            }
            let screen: u32 = rest[0].parse()?;
            Ok(Command::FocusScreen { screen })
        }
        "list-windows" => Ok(Command::ListWindows),
        "get-state" => Ok(Command::GetState),
        _ => bail!("Unknown command: {}", cmd),
    }
}
