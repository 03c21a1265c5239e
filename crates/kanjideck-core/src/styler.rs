/// Style fixes applied to EDICT glosses, in declared order. Sorted by lower
/// case, then by initial letter capitalized, then by all caps, then by
/// phrases to remove.
const RULES: &[(&str, &str)] = &[
    ("acknowledgement", "acknowledgment"),
    ("aeroplane", "airplane"),
    ("centre", "center"),
    ("colour", "color"),
    ("defence", "defense"),
    ("e.g. ", "e.g., "),
    ("economising", "economizing"),
    ("electro-magnetic", "electromagnetic"),
    ("favourable", "favorable"),
    ("favourite", "favorite"),
    ("honour", "honor"),
    ("i.e. ", "i.e., "),
    ("judgement", "judgment"),
    ("lakeshore", "lake shore"),
    ("metre", "meter"),
    ("neighbourhood", "neighborhood"),
    ("speciality", "specialty"),
    ("storeys", "stories"),
    ("theatre", "theater"),
    ("traveller", "traveler"),
    ("Ph.D", "PhD"),
    ("Philipines", "Philippines"),
    ("JUDGEMENT", "JUDGMENT"),
    ("(kokuji)", "kokuji"),
    (" (endeavour)", ""),
    (" (labourer)", ""),
    (" (theater, theater)", "(theater)"),
    (" (theatre, theater)", "(theater)"),
];

/// Fixes spelling and punctuation quirks in dictionary glosses.
///
/// Each rule rewrites at most one occurrence per call, so a single quirk per
/// line is fixed rather than the whole text rewritten.
#[derive(Debug, Clone)]
pub struct Styler {
    rules: &'static [(&'static str, &'static str)],
}

impl Styler {
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// Returns re-styled text.
    pub fn fix(&self, text: &str) -> String {
        let mut text = text.to_string();

        for (quirk, replacement) in self.rules {
            if text.contains(quirk) {
                text = text.replacen(quirk, replacement, 1);
            }
        }

        text
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::new()
    }
}
