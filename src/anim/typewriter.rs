use std::time::Duration;

/// Per-tick delays for the fake search box animation.
///
/// Typing and deleting run at different speeds, so the driver must use
/// one-shot timeouts rescheduled with whatever `tick()` returns rather
/// than a fixed-rate interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Delay after typing one character.
    pub type_delay: Duration,
    /// Delay after deleting one character.
    pub delete_delay: Duration,
    /// Hold time on the fully typed query before erasing starts.
    pub hold_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(80),
            delete_delay: Duration::from_millis(30),
            hold_delay: Duration::from_millis(2000),
        }
    }
}

/// Simulates a user typing example queries into a search box.
///
/// Cycles through a fixed list: type a query character by character, hold
/// it, erase it, move to the next entry, wrapping after the last. The
/// machine has no terminal state; the owning component stops it by simply
/// not scheduling another tick.
pub struct Typewriter {
    queries: &'static [&'static str],
    pacing: Pacing,
    index: usize,
    deleting: bool,
    text: String,
}

impl Typewriter {
    /// `queries` must be non-empty.
    pub fn new(queries: &'static [&'static str], pacing: Pacing) -> Self {
        debug_assert!(!queries.is_empty());
        Self {
            queries,
            pacing,
            index: 0,
            deleting: false,
            text: String::new(),
        }
    }

    /// The text currently shown in the search box.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Index of the query being typed or erased.
    pub fn query_index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Applies one transition and returns the delay before the next tick.
    pub fn tick(&mut self) -> Duration {
        let target = self.queries[self.index];
        if self.deleting {
            return self.erase_one();
        }
        let typed = self.text.chars().count();
        match target.chars().nth(typed) {
            Some(ch) => {
                self.text.push(ch);
                if typed + 1 == target.chars().count() {
                    self.pacing.hold_delay
                } else {
                    self.pacing.type_delay
                }
            }
            // Hold elapsed on the full query; start erasing.
            None => {
                self.deleting = true;
                self.erase_one()
            }
        }
    }

    fn erase_one(&mut self) -> Duration {
        self.text.pop();
        if self.text.is_empty() {
            self.deleting = false;
            self.index = (self.index + 1) % self.queries.len();
            self.pacing.type_delay
        } else {
            self.pacing.delete_delay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERIES: &[&str] = &[
        "What is the minimum stair width in Ontario?",
        "NBC 2025 fire rating requirements",
        "Ça dépend du Code de construction du Québec",
    ];

    fn fast_pacing() -> Pacing {
        Pacing {
            type_delay: Duration::from_millis(8),
            delete_delay: Duration::from_millis(3),
            hold_delay: Duration::from_millis(200),
        }
    }

    #[test]
    fn text_is_always_a_prefix_of_the_active_query() {
        let mut tw = Typewriter::new(QUERIES, fast_pacing());
        for _ in 0..2000 {
            tw.tick();
            let active = QUERIES[tw.query_index()];
            let shown: Vec<char> = tw.text().chars().collect();
            let target: Vec<char> = active.chars().collect();
            assert!(
                shown.len() <= target.len() && shown == target[..shown.len()],
                "{:?} is not a prefix of {:?}",
                tw.text(),
                active
            );
        }
    }

    #[test]
    fn index_cycles_in_order_and_wraps() {
        let mut tw = Typewriter::new(QUERIES, fast_pacing());
        let mut seen = vec![tw.query_index()];
        for _ in 0..5000 {
            tw.tick();
            if *seen.last().expect("non-empty") != tw.query_index() {
                seen.push(tw.query_index());
            }
        }
        // Strictly 0, 1, 2, 0, 1, 2, ... for as long as we ran.
        for (i, idx) in seen.iter().enumerate() {
            assert_eq!(*idx, i % QUERIES.len());
        }
        assert!(seen.len() > QUERIES.len(), "should have wrapped at least once");
    }

    #[test]
    fn full_cycle_returns_to_start_with_empty_text() {
        const SHORT: &[&str] = &["A", "BB"];
        let mut tw = Typewriter::new(SHORT, Pacing::default());

        // Type "A"; single char means the full-query hold applies at once.
        assert_eq!(tw.tick(), Duration::from_millis(2000));
        assert_eq!(tw.text(), "A");

        // Hold elapsed: erase "A", advance to "BB".
        assert_eq!(tw.tick(), Duration::from_millis(80));
        assert_eq!(tw.text(), "");
        assert_eq!(tw.query_index(), 1);
        assert!(!tw.is_deleting());

        // Type "B", "BB", then erase both.
        assert_eq!(tw.tick(), Duration::from_millis(80));
        assert_eq!(tw.tick(), Duration::from_millis(2000));
        assert_eq!(tw.text(), "BB");
        assert_eq!(tw.tick(), Duration::from_millis(30));
        assert_eq!(tw.text(), "B");
        assert_eq!(tw.tick(), Duration::from_millis(80));

        // Pointer wrapped to 0 and the box is empty again.
        assert_eq!(tw.query_index(), 0);
        assert_eq!(tw.text(), "");
        assert!(!tw.is_deleting());
    }

    #[test]
    fn delete_phase_reaches_empty_before_switching_queries() {
        let mut tw = Typewriter::new(QUERIES, fast_pacing());
        let mut last_index = tw.query_index();
        for _ in 0..2000 {
            let was_empty = tw.text().is_empty();
            tw.tick();
            if tw.query_index() != last_index {
                // The pointer only moves on the delete-to-empty transition.
                assert!(!was_empty);
                assert!(tw.text().is_empty());
                last_index = tw.query_index();
            }
        }
    }

    #[test]
    fn typing_and_deleting_report_their_own_delays() {
        let pacing = fast_pacing();
        let mut tw = Typewriter::new(QUERIES, pacing);
        for _ in 0..2000 {
            let deleting_before = tw.is_deleting();
            let len_before = tw.text().chars().count();
            let delay = tw.tick();
            let len_after = tw.text().chars().count();
            if len_after > len_before {
                assert!(delay == pacing.type_delay || delay == pacing.hold_delay);
            } else if deleting_before && !tw.text().is_empty() {
                assert_eq!(delay, pacing.delete_delay);
            }
        }
    }

    #[test]
    fn multibyte_queries_never_split_a_char() {
        const ACCENTED: &[&str] = &["Largeur d'escalier exigée"];
        let mut tw = Typewriter::new(ACCENTED, fast_pacing());
        for _ in 0..500 {
            tw.tick();
            // Would panic on push/pop misuse; also check validity explicitly.
            assert!(ACCENTED[0].starts_with(tw.text()));
        }
    }
}
