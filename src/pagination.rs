/// 1-based pagination window applied after all filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number requested by the caller, counted from 1.
    pub page: usize,
    /// Number of records per page.
    pub per_page: usize,
}

impl Pagination {
    /// Index of the first record covered by the window.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1) * self.per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_based() {
        let pagination = Pagination {
            page: 3,
            per_page: 20,
        };

        assert_eq!(pagination.offset(), 40);
    }

    #[test]
    fn offset_treats_page_zero_as_first_page() {
        let pagination = Pagination {
            page: 0,
            per_page: 10,
        };

        assert_eq!(pagination.offset(), 0);
    }
}
