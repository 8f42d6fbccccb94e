//! Post-search menu.

/// What to do after a search completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Results,
    Methodology,
    NewSearch,
    Quit,
}

impl View {
    const ALL: &[Self] = &[Self::Results, Self::Methodology, Self::NewSearch, Self::Quit];
    const WITHOUT_RESULTS: &[Self] = &[Self::Methodology, Self::NewSearch, Self::Quit];

    /// Menu entries for a finished session. The results view is only
    /// offered when the lookup succeeded.
    #[must_use]
    pub const fn available(has_result: bool) -> &'static [Self] {
        if has_result {
            Self::ALL
        } else {
            Self::WITHOUT_RESULTS
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Results => "Results",
            Self::Methodology => "Methodology",
            Self::NewSearch => "New search",
            Self::Quit => "Quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_only_offered_on_success() {
        assert!(View::available(true).contains(&View::Results));
        assert!(!View::available(false).contains(&View::Results));
        for has_result in [true, false] {
            let views = View::available(has_result);
            assert!(views.contains(&View::Methodology));
            assert_eq!(views.last(), Some(&View::Quit));
        }
    }
}
