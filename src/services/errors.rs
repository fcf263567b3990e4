#[derive(Debug, PartialEq)]
pub enum CouponError {
    EmptyCode,
    InvalidCode,
    NotYetValid,
    Expired,
    NegativeSubtotal,
    InvalidDiscount,
    InvalidWindow,
    CouponAlreadyExists,
    DatabaseError(String),
}

impl std::error::Error for CouponError {}

impl std::fmt::Display for CouponError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CouponError::EmptyCode => write!(f, "Please enter a coupon code"),
            CouponError::InvalidCode => write!(f, "Invalid coupon code"),
            CouponError::NotYetValid => write!(f, "This coupon is not yet valid"),
            CouponError::Expired => write!(f, "This coupon has expired"),
            CouponError::NegativeSubtotal => write!(f, "Subtotal cannot be negative"),
            CouponError::InvalidDiscount => {
                write!(f, "Coupon discount must be between 0 and 100 percent")
            }
            CouponError::InvalidWindow => {
                write!(f, "Coupon start date must not be after its end date")
            }
            CouponError::CouponAlreadyExists => write!(f, "Coupon code already exists"),
            CouponError::DatabaseError(_) => write!(f, "Coupon storage error"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CatalogServiceError {
    ProductNotFound,
    SectionNotFound,
    DatabaseError(String),
}

impl std::error::Error for CatalogServiceError {}

impl std::fmt::Display for CatalogServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogServiceError::ProductNotFound => write!(f, "Product not found"),
            CatalogServiceError::SectionNotFound => write!(f, "No products found for this type"),
            CatalogServiceError::DatabaseError(_) => write!(f, "Failed to load products"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum DiscoveryServiceError {
    EmptySearchTerm,
    DatabaseError(String),
}

impl std::error::Error for DiscoveryServiceError {}

impl std::fmt::Display for DiscoveryServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscoveryServiceError::EmptySearchTerm => write!(f, "Search term cannot be empty"),
            DiscoveryServiceError::DatabaseError(_) => write!(f, "Failed to record search"),
        }
    }
}
