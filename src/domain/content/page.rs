use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page-size policy applied to every paginated query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    default_size: u32,
    max_size: u32,
}

impl PageLimits {
    pub fn new(default_size: u32, max_size: u32) -> DomainResult<Self> {
        if default_size == 0 || max_size == 0 {
            return Err(DomainError::InvalidPageSize(
                "page size limits must be positive".into(),
            ));
        }
        Ok(Self {
            default_size: default_size.min(max_size),
            max_size,
        })
    }

    pub fn default_size(&self) -> u32 {
        self.default_size
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Validates a requested page size. Missing means the default; values
    /// above the maximum are clamped.
    pub fn size(&self, amount: Option<i64>) -> DomainResult<u32> {
        match amount {
            None => Ok(self.default_size),
            Some(amount) if amount <= 0 => Err(DomainError::InvalidPageSize(format!(
                "amount must be positive, got {amount}"
            ))),
            Some(amount) => Ok(u32::try_from(amount)
                .unwrap_or(u32::MAX)
                .min(self.max_size)),
        }
    }
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: MAX_PAGE_SIZE,
        }
    }
}

/// A 1-indexed page of fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub fn new(page: Option<i64>, amount: Option<i64>, limits: &PageLimits) -> DomainResult<Self> {
        let size = limits.size(amount)?;
        let page = match page {
            None => 1,
            Some(page) if page <= 0 => {
                return Err(DomainError::InvalidPage(format!(
                    "page must be a positive integer, got {page}"
                )));
            }
            Some(page) => u32::try_from(page).map_err(|_| {
                DomainError::InvalidPage(format!("page {page} is out of range"))
            })?,
        };
        Ok(Self { page, size })
    }

    pub fn first(size: u32) -> Self {
        Self {
            page: 1,
            size: size.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.size)
    }
}

/// Number of pages of `size` needed to hold `total` items.
pub fn page_count(total: u64, size: u32) -> u64 {
    if size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(size))
}
