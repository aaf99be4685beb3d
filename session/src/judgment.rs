//! Maps a visit count to the message shown to the visitor.

const WELCOME: &str = "Welcome, nice to meet you!";
const BACK: &str = "Oh, you're back. Cool.";
const AGAIN: &str = "Again? I mean... hi, I guess.";
const SERIOUSLY: &str = "Seriously? Don't you have anything better to do?";
const FINE: &str = "AGAIN? Fine, whatever. I'll be here.";
const OTHER_WEBSITES: &str = "You know, there are other websites on the internet...";
const WORRIED: &str = "I'm starting to worry about you. This isn't healthy.";
const TEN: &str = "TEN FUCKING VISITS? Get a life, for fuck's sake!";
const DISAPPOINTED: &str = "I'm not mad, I'm just disappointed. Actually, I'm both.";
const RENT: &str = "You know what? I'm going to start charging rent.";
const UNLUCKY: &str = "Unlucky 13. Perfect for your obsessive behavior.";
const STALKERS: &str = "I've seen stalkers with more restraint than you.";
const FIFTEEN: &str = "Fifteen. That's like... three times five. That's too many.";
const CREATIVE: &str = "I'm running out of creative ways to tell you to go away.";
const ATTACHMENT: &str = "Maybe we should talk about your attachment issues?";
const RESTRAINING: &str = "I'm seriously considering a restraining order.";
const NINETEEN: &str = "One more and it's 20. Please don't make it 20.";
const TWENTY: &str = "TWENTY FUCKING VISITS. I hope you're proud of yourself.";

/// Shared message for 21 through 30 visits.
pub const BROKEN: &str = "I've run out of unique judgments. You've broken me. Are you happy now?";
/// Shared message for 31 through 50 visits.
pub const CODEPENDENT: &str =
    "I think we're in this together now. Let's just embrace our codependent relationship.";
/// Shared message for 51 through 100 visits.
pub const TORTURE: &str =
    "At this point, I feel like you're just doing this to torture me. Well played.";
/// Shared message for anything above 100 visits.
pub const CHAMPION: &str =
    "Okay, you've won. You are the undisputed champion of wasting time on the internet.";

/// Returns the judgment for the given visit count.
///
/// Counts 1 to 20 each have their own line (6-7 and 8-9 share one), higher counts fall
/// into four buckets. Zero is never produced by the handler and maps to an empty string.
pub fn judge(visits: u64) -> &'static str {
    match visits {
        0 => "",
        1 => WELCOME,
        2 => BACK,
        3 => AGAIN,
        4 => SERIOUSLY,
        5 => FINE,
        6 | 7 => OTHER_WEBSITES,
        8 | 9 => WORRIED,
        10 => TEN,
        11 => DISAPPOINTED,
        12 => RENT,
        13 => UNLUCKY,
        14 => STALKERS,
        15 => FIFTEEN,
        16 => CREATIVE,
        17 => ATTACHMENT,
        18 => RESTRAINING,
        19 => NINETEEN,
        20 => TWENTY,
        21..=30 => BROKEN,
        31..=50 => CODEPENDENT,
        51..=100 => TORTURE,
        _ => CHAMPION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_judgments() {
        let expected = [
            (1, "Welcome, nice to meet you!"),
            (2, "Oh, you're back. Cool."),
            (3, "Again? I mean... hi, I guess."),
            (4, "Seriously? Don't you have anything better to do?"),
            (5, "AGAIN? Fine, whatever. I'll be here."),
            (6, "You know, there are other websites on the internet..."),
            (7, "You know, there are other websites on the internet..."),
            (8, "I'm starting to worry about you. This isn't healthy."),
            (9, "I'm starting to worry about you. This isn't healthy."),
            (10, "TEN FUCKING VISITS? Get a life, for fuck's sake!"),
            (11, "I'm not mad, I'm just disappointed. Actually, I'm both."),
            (12, "You know what? I'm going to start charging rent."),
            (13, "Unlucky 13. Perfect for your obsessive behavior."),
            (14, "I've seen stalkers with more restraint than you."),
            (15, "Fifteen. That's like... three times five. That's too many."),
            (16, "I'm running out of creative ways to tell you to go away."),
            (17, "Maybe we should talk about your attachment issues?"),
            (18, "I'm seriously considering a restraining order."),
            (19, "One more and it's 20. Please don't make it 20."),
            (20, "TWENTY FUCKING VISITS. I hope you're proud of yourself."),
        ];

        for (visits, message) in expected {
            assert_eq!(judge(visits), message, "visit {visits}");
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_ne!(judge(20), BROKEN);
        assert_eq!(judge(21), BROKEN);
        assert_eq!(judge(30), BROKEN);
        assert_eq!(judge(31), CODEPENDENT);
        assert_eq!(judge(50), CODEPENDENT);
        assert_eq!(judge(51), TORTURE);
        assert_eq!(judge(100), TORTURE);
        assert_eq!(judge(101), CHAMPION);
        assert_eq!(judge(u64::MAX), CHAMPION);
    }

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(judge(0), "");
    }
}
