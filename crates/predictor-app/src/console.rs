use predictor_core::model::rank::Rank;
use predictor_core::model::suit::Suit;
use thiserror::Error;

/// One console command. Invalid input never reaches the core: the loop
/// reports the error and prompts again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deal,
    Show,
    Calculate,
    Shuffle,
    Clear,
    Bet,
    Fold,
    Leave,
    Give { rank: Rank, suit: Suit },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("give needs a rank value and a suit, e.g. `give 5 hearts`")]
    MalformedGive,
    #[error("invalid rank value: {0} (expected 1-13)")]
    InvalidRank(String),
    #[error("invalid suit: {0}")]
    InvalidSuit(String),
    #[error("empty input")]
    Empty,
}

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err(InputError::Empty);
    };

    match word.to_ascii_lowercase().as_str() {
        "deal" => Ok(Command::Deal),
        "show" => Ok(Command::Show),
        "calculate" => Ok(Command::Calculate),
        "shuffle" => Ok(Command::Shuffle),
        "clear" => Ok(Command::Clear),
        "bet" => Ok(Command::Bet),
        "fold" => Ok(Command::Fold),
        "leave" => Ok(Command::Leave),
        "give" => {
            let value = parts.next().ok_or(InputError::MalformedGive)?;
            let suit = parts.next().ok_or(InputError::MalformedGive)?;
            let rank = value
                .parse::<u8>()
                .ok()
                .and_then(Rank::from_value)
                .ok_or_else(|| InputError::InvalidRank(value.to_string()))?;
            let suit = suit
                .parse::<Suit>()
                .map_err(|err| InputError::InvalidSuit(err.0))?;
            Ok(Command::Give { rank, suit })
        }
        other => Err(InputError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, InputError, parse_command};
    use predictor_core::model::rank::Rank;
    use predictor_core::model::suit::Suit;

    #[test]
    fn parses_single_word_commands() {
        assert_eq!(parse_command("deal").unwrap(), Command::Deal);
        assert_eq!(parse_command("  BET  ").unwrap(), Command::Bet);
        assert_eq!(parse_command("leave").unwrap(), Command::Leave);
    }

    #[test]
    fn parses_give_with_rank_and_suit() {
        assert_eq!(
            parse_command("give 5 hearts").unwrap(),
            Command::Give {
                rank: Rank::Five,
                suit: Suit::Hearts
            }
        );
        assert_eq!(
            parse_command("give 1 spade").unwrap(),
            Command::Give {
                rank: Rank::Ace,
                suit: Suit::Spades
            }
        );
    }

    #[test]
    fn rejects_unknown_and_malformed_input() {
        assert!(matches!(
            parse_command("raise"),
            Err(InputError::UnknownCommand(_))
        ));
        assert!(matches!(parse_command("give 5"), Err(InputError::MalformedGive)));
        assert!(matches!(
            parse_command("give 14 hearts"),
            Err(InputError::InvalidRank(_))
        ));
        assert!(matches!(
            parse_command("give 5 jokers"),
            Err(InputError::InvalidSuit(_))
        ));
        assert!(matches!(parse_command("   "), Err(InputError::Empty)));
    }
}
