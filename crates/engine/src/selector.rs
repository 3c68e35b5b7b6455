//! Most Important Task (MIT) selection.

use prio_core::{Category, Tag, Task};

/// Upper bound on the daily MIT list.
pub const MAX_MITS: usize = 3;

/// Picks a short daily list from a sorted backlog.
pub trait MitSelector: Send + Sync {
    /// Positions of the chosen tasks in `sorted`, in selection order.
    fn select_indices(&self, sorted: &[Task]) -> Vec<usize>;

    /// The chosen tasks, in selection order.
    fn select(&self, sorted: &[Task]) -> Vec<Task> {
        self.select_indices(sorted)
            .into_iter()
            .map(|i| sorted[i].clone())
            .collect()
    }
}

/// Diversifies picks across categories.
///
/// In order:
/// 1. the first `fundament` task
/// 2. the first `strategic` task tagged `BigBet`, or else the first `strategic` task
/// 3. the first not-yet-picked task tagged `HighROI` or `QuickWin`
///
/// Picks are deduplicated by position and capped at [`MAX_MITS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMitSelector;

impl MitSelector for DefaultMitSelector {
    fn select_indices(&self, sorted: &[Task]) -> Vec<usize> {
        let first = |pred: &dyn Fn(&Task) -> bool| sorted.iter().position(pred);

        let mut picks: Vec<usize> = Vec::with_capacity(MAX_MITS);

        if let Some(i) = first(&|t: &Task| t.category() == Category::Fundament) {
            picks.push(i);
        }

        let strategic = |t: &Task| t.category() == Category::Strategic;
        let big_bet = first(&|t: &Task| strategic(t) && t.tag == Some(Tag::BigBet));
        if let Some(i) = big_bet.or_else(|| first(&strategic)) {
            picks.push(i);
        }

        let momentum = sorted
            .iter()
            .enumerate()
            .find(|(i, t)| !picks.contains(i) && t.tag.is_some_and(|tag| tag.is_momentum()))
            .map(|(i, _)| i);
        if let Some(i) = momentum {
            picks.push(i);
        }

        let mut unique = Vec::with_capacity(picks.len());
        for i in picks {
            if !unique.contains(&i) {
                unique.push(i);
            }
        }
        unique.truncate(MAX_MITS);
        unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, layer: &str, tag: Option<Tag>) -> Task {
        let mut t = Task::new(title).with_layer(layer);
        t.tag = tag;
        t
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_one_per_slot() {
        let sorted = vec![
            task("support-quick", "Support", Some(Tag::QuickWin)),
            task("strategic", "Strategic", None),
            task("fundament", "Fundament", None),
            task("fundament-2", "Fundament", None),
        ];
        let mits = DefaultMitSelector.select(&sorted);
        assert_eq!(titles(&mits), ["fundament", "strategic", "support-quick"]);
    }

    #[test]
    fn test_big_bet_preferred_among_strategic() {
        let sorted = vec![
            task("s1", "Strategic", Some(Tag::HighRoi)),
            task("s2", "strategie", Some(Tag::BigBet)),
        ];
        let picks = DefaultMitSelector.select_indices(&sorted);
        // s2 fills the strategic slot, s1 then qualifies as momentum.
        assert_eq!(picks, vec![1, 0]);
    }

    #[test]
    fn test_momentum_skips_already_picked() {
        let sorted = vec![
            task("f", "Fundament", Some(Tag::QuickWin)),
            task("l", "Leisure", Some(Tag::HighRoi)),
        ];
        let mits = DefaultMitSelector.select(&sorted);
        assert_eq!(titles(&mits), ["f", "l"]);
    }

    #[test]
    fn test_missing_categories() {
        let sorted = vec![task("a", "Support", None), task("b", "Leisure", Some(Tag::BigBet))];
        assert!(DefaultMitSelector.select(&sorted).is_empty());
        assert!(DefaultMitSelector.select(&[]).is_empty());
    }

    #[test]
    fn test_never_more_than_three_and_unique() {
        let layers = ["Fundament", "Strategic", "Support", "Leisure"];
        let tags = [None, Some(Tag::QuickWin), Some(Tag::HighRoi), Some(Tag::BigBet)];
        let mut sorted = Vec::new();
        for (i, layer) in layers.iter().enumerate() {
            for (j, tag) in tags.iter().enumerate() {
                sorted.push(task(&format!("{}-{}", i, j), layer, *tag));
            }
        }

        let picks = DefaultMitSelector.select_indices(&sorted);
        assert!(picks.len() <= MAX_MITS);
        let mut dedup = picks.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), picks.len());
        // fundament first, strategic BigBet, then first momentum task (fundament QuickWin)
        assert_eq!(picks, vec![0, 7, 1]);
    }
}
