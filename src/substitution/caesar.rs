/// Rotates ASCII letters by `shift` positions within their case, leaving
/// every other character alone.
pub fn rot(text: &str, shift: u8) -> String {
    let shift = shift % 26;

    text.chars()
        .map(|c| {
            let base = match c {
                'a'..='z' => b'a',
                'A'..='Z' => b'A',
                _ => return c,
            };
            ((c as u8 - base + shift) % 26 + base) as char
        })
        .collect()
}

pub fn rot13(text: &str) -> String {
    rot(text, 13)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rot13() {
        assert_eq!(rot13("Why did the chicken cross the road?"), "Jul qvq gur puvpxra pebff gur ebnq?");
        assert_eq!(rot13("Gb trg gb gur bgure fvqr!"), "To get to the other side!");
    }

    #[test]
    fn test_rot13_is_an_involution() {
        let text = "The Quick Brown Fox Jumps Over The Lazy Dog.";
        assert_eq!(rot13(&rot13(text)), text);
    }

    #[test]
    fn test_shifts_compose_mod_26() {
        let text = "attack at dawn";
        assert_eq!(rot(&rot(text, 10), 16), text);
        assert_eq!(rot(text, 26), text);
        assert_eq!(rot(text, 27), rot(text, 1));
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(rot("3.14159, ok?", 7), "3.14159, vr?");
    }
}
