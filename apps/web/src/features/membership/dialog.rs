//! State of the "change membership" dialog.

use super::types::MembershipTier;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MembershipDialog {
    items: Vec<MembershipTier>,
    selected: usize,
    open: bool,
}

impl MembershipDialog {
    /// Builds a closed dialog with the first tier preselected.
    pub fn new(items: &[MembershipTier]) -> Self {
        Self {
            items: items.to_vec(),
            selected: 0,
            open: false,
        }
    }

    pub fn items(&self) -> &[MembershipTier] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&MembershipTier> {
        self.items.get(self.selected)
    }

    /// Opens the dialog with the first tier selected.
    pub fn open(&mut self) {
        self.selected = 0;
        self.open = true;
    }

    /// Selects a tier; out-of-range indexes keep the current choice.
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    /// Closes the dialog and returns the chosen tier.
    pub fn confirm(&mut self) -> Option<MembershipTier> {
        if !self.open {
            return None;
        }
        self.open = false;
        let tier = self.selected().cloned();
        if let Some(tier) = &tier {
            log::info!("New membership price: {}", tier.price);
        }
        tier
    }

    /// Closes the dialog without a choice.
    pub fn cancel(&mut self) {
        if self.open {
            self.open = false;
            log::info!("membership dialog dismissed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MembershipDialog;
    use crate::features::membership::types::tiers;

    #[test]
    fn confirm_returns_the_selected_tier() {
        let mut dialog = MembershipDialog::new(tiers());
        dialog.open();
        dialog.select(1);

        let tier = dialog.confirm().expect("a tier is chosen");
        assert_eq!(tier.price, 300);
        assert!(!dialog.is_open());
    }

    #[test]
    fn opening_resets_to_the_first_tier() {
        let mut dialog = MembershipDialog::new(tiers());
        dialog.open();
        dialog.select(2);
        dialog.cancel();

        dialog.open();
        assert_eq!(dialog.selected().map(|tier| tier.price), Some(500));
    }

    #[test]
    fn cancel_and_invalid_selection_yield_nothing() {
        let mut dialog = MembershipDialog::new(tiers());
        assert_eq!(dialog.confirm(), None);

        dialog.open();
        dialog.select(9);
        assert_eq!(dialog.selected_index(), 0);
        dialog.cancel();
        assert!(!dialog.is_open());
        assert_eq!(dialog.confirm(), None);
    }
}
