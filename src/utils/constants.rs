/// Dígitos a los que rellena `pad_number`
pub const DEFAULT_PADDED_DIGITS: usize = 2;

pub const DEFAULT_PADDING: &str = "0";

// Textos de la UI

pub const SIGN_IN_PROMPT: &str = "To sign in, answer:";
pub const SIGN_IN_QUESTION: &str = "What is this developer's last name?";
pub const INVALID_SIGN_IN: &str = "That's not it. Try again!";
pub const EASTER_EGG_FOUND_TITLE: &str = "Easter Egg Found!";
pub const EASTER_EGG_FOUND_BODY: &str = "Something tells me you must be NICE!";

pub const EASTER_EGG_NAV_FOUND: &str = "How NICE of you to find it!";
pub const EASTER_EGG_NAV_MISSING: &str = "Not Yet...";

pub const EASTER_EGG_HINT_FOUND: &str = "You found the easter egg! NICE!";
pub const EASTER_EGG_HINT_LINE: &str =
    "To find the easter egg, sign out and see if any other passwords work.";
pub const EASTER_EGG_HINT_NICE_BEFORE: &str = "Maybe you'll find a ";
pub const EASTER_EGG_HINT_NICE_WORD: &str = "nice";
pub const EASTER_EGG_HINT_NICE_AFTER: &str = " one that'll do the trick.";

pub const NAV_SIGNED_IN_SINCE: &str = "Signed In Since";
pub const NAV_USER_AGENT: &str = "User Agent";
pub const NAV_EASTER_EGG: &str = "Easter Egg Found";
pub const NAV_SIGN_OUT: &str = "Sign Out";
pub const SIGN_IN_BUTTON: &str = "Sign In";
