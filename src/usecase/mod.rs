mod classify;
mod customer;

pub use classify::PaymentMethodClassifier;
pub use customer::{search_query_exact_email, CustomerLookupUseCase};
