use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageCommand {
    pub image: &'static str,
    pub command: &'static str,
    pub note: Option<&'static str>,
}

/// Screenshots of the manual install walkthrough and the shell command each
/// one shows.
pub const IMAGE_COMMANDS: [ImageCommand; 5] = [
    ImageCommand {
        image: "images/Method_1.1.png",
        command: "git clone git@github.com:xynnpg/DiscordAI.git",
        note: None,
    },
    ImageCommand {
        image: "images/Method_1.2.png",
        command: "cd DiscordAI",
        note: None,
    },
    ImageCommand {
        image: "images/Method_1.3.png",
        command: "nano .env",
        note: Some("Or open it in notepad on Windows"),
    },
    ImageCommand {
        image: "images/Method_1.4.png",
        command: "pip install -r requirements.txt",
        note: None,
    },
    ImageCommand {
        image: "images/Method_1.5.png",
        command: "python run.py",
        note: None,
    },
];

pub fn command_for_image(image: &str) -> Option<&'static ImageCommand> {
    IMAGE_COMMANDS.iter().find(|entry| entry.image == image)
}

/// Contents of the optional panels under the enlarged screenshot. A note is
/// only ever shown together with a command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModalPanels {
    pub command: Option<String>,
    pub note: Option<String>,
}

impl ModalPanels {
    pub fn for_image(image: &str) -> Self {
        match command_for_image(image) {
            Some(entry) => Self {
                command: Some(entry.command.to_string()),
                note: entry.note.map(str::to_string),
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_image_hides_both_panels() {
        let panels = ModalPanels::for_image("images/Bot_Invite.png");
        assert_eq!(panels, ModalPanels::default());
    }

    #[test]
    fn known_image_without_note_shows_command_only() {
        let panels = ModalPanels::for_image("images/Method_1.4.png");
        assert_eq!(
            panels.command.as_deref(),
            Some("pip install -r requirements.txt")
        );
        assert_eq!(panels.note, None);
    }

    #[test]
    fn env_step_carries_editor_note() {
        let panels = ModalPanels::for_image("images/Method_1.3.png");
        assert_eq!(panels.command.as_deref(), Some("nano .env"));
        assert_eq!(
            panels.note.as_deref(),
            Some("Or open it in notepad on Windows")
        );
    }

    #[test]
    fn lookup_is_exact_match() {
        assert!(command_for_image("images/Method_1.1.png").is_some());
        assert!(command_for_image("/images/Method_1.1.png").is_none());
        assert!(command_for_image("images/method_1.1.png").is_none());
    }

    #[test]
    fn table_images_are_unique() {
        for (index, entry) in IMAGE_COMMANDS.iter().enumerate() {
            assert!(
                IMAGE_COMMANDS[index + 1..]
                    .iter()
                    .all(|other| other.image != entry.image)
            );
        }
    }
}
