mod block;
mod finding;
mod rules;

pub use block::{
    Block, BlockPattern, CLOUDFRONT_ALIASES, CUSTOM_DOMAIN_CONDITION, CUSTOM_DOMAIN_URL, DNS_RECORD,
};
pub use finding::Finding;
pub use rules::{
    CUSTOM_DOMAIN_REQUIREMENTS, REQUIRED_PARAMETERS, VALIDATED_FEATURES, validate_custom_domain,
};
