//! Line commands accepted by the terminal front end

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Raw press-in on the countdown screen
    Down,
    /// Raw press-out on the countdown screen
    Up,
    /// Press-in immediately followed by press-out
    Tap,
    Pause,
    Resume,
    Toggle,
    Reset,
    Back,
    Close,
    Status,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown command: {0}")]
pub struct UnknownInput(pub String);

impl FromStr for Input {
    type Err = UnknownInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "down" | "d" => Ok(Input::Down),
            "up" | "u" => Ok(Input::Up),
            "tap" | "t" => Ok(Input::Tap),
            "pause" => Ok(Input::Pause),
            "resume" => Ok(Input::Resume),
            "toggle" | "p" => Ok(Input::Toggle),
            "reset" | "r" => Ok(Input::Reset),
            "back" | "b" => Ok(Input::Back),
            "close" | "c" => Ok(Input::Close),
            "status" | "s" => Ok(Input::Status),
            "quit" | "q" | "exit" => Ok(Input::Quit),
            other => Err(UnknownInput(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!("tap".parse::<Input>(), Ok(Input::Tap));
        assert_eq!(" Reset \n".parse::<Input>(), Ok(Input::Reset));
        assert_eq!("q".parse::<Input>(), Ok(Input::Quit));
        assert_eq!(
            "boil".parse::<Input>(),
            Err(UnknownInput("boil".to_string()))
        );
    }
}
