//! The custom domain checklist
//!
//! Every check looks at raw text. Block-scoped checks are skipped when the
//! block's anchor is present but its end cannot be found.

use super::block::{CLOUDFRONT_ALIASES, CUSTOM_DOMAIN_CONDITION, CUSTOM_DOMAIN_URL, DNS_RECORD};
use super::finding::Finding;

pub const REQUIRED_PARAMETERS: [&str; 4] = [
    "domainName:",
    "recordName:",
    "certificateArn:",
    "hostedZoneId:",
];

/// Conditions that `HasCustomDomain` must combine.
pub const CUSTOM_DOMAIN_REQUIREMENTS: [&str; 3] =
    ["HasHostedZone", "HasCertificate", "HasDomainName"];

/// Summary printed when every check passes.
pub const VALIDATED_FEATURES: [&str; 6] = [
    "domainName parameter added",
    "HasDomainName condition added",
    "HasCustomDomain condition updated to include all requirements",
    "CloudFront Aliases use recordName.domainName format",
    "DNS Record uses recordName.domainName format",
    "CustomDomainUrl output added with proper condition",
];

const QUALIFIED_DOMAIN: &str = "${recordName}.${domainName}";
const CUSTOM_DOMAIN_URL_VALUE: &str = "https://${recordName}.${domainName}";

/// Run every check in order and collect the failures.
pub fn validate_custom_domain(text: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    check_required_parameters(text, &mut findings);
    check_domain_name_condition(text, &mut findings);
    check_custom_domain_condition(text, &mut findings);
    check_cloudfront_aliases(text, &mut findings);
    check_dns_record(text, &mut findings);
    check_custom_domain_output(text, &mut findings);

    tracing::debug!("Custom domain checks produced {} finding(s)", findings.len());
    findings
}

fn check_required_parameters(text: &str, findings: &mut Vec<Finding>) {
    for param in REQUIRED_PARAMETERS {
        if !text.contains(param) {
            findings.push(Finding::new(format!("Missing parameter: {param}")));
        }
    }
}

fn check_domain_name_condition(text: &str, findings: &mut Vec<Finding>) {
    if !text.contains("HasDomainName:") {
        findings.push(Finding::new("Missing HasDomainName condition"));
    }
}

fn check_custom_domain_condition(text: &str, findings: &mut Vec<Finding>) {
    let Some(block) = CUSTOM_DOMAIN_CONDITION.find(text) else {
        tracing::debug!("No {} block, skipping", CUSTOM_DOMAIN_CONDITION.anchor());
        return;
    };

    for condition in CUSTOM_DOMAIN_REQUIREMENTS {
        if !block.text.contains(condition) {
            findings.push(Finding::in_block(
                format!("HasCustomDomain condition missing reference to {condition}"),
                block.span.clone(),
            ));
        }
    }
}

fn check_cloudfront_aliases(text: &str, findings: &mut Vec<Finding>) {
    let Some(block) = CLOUDFRONT_ALIASES.find(text) else {
        tracing::debug!("No {} block, skipping", CLOUDFRONT_ALIASES.anchor());
        return;
    };

    if !block.text.contains(QUALIFIED_DOMAIN) {
        findings.push(Finding::in_block(
            format!("CloudFront Aliases should use {QUALIFIED_DOMAIN}"),
            block.span,
        ));
    }
}

fn check_dns_record(text: &str, findings: &mut Vec<Finding>) {
    let Some(block) = DNS_RECORD.find(text) else {
        tracing::debug!("No {} block, skipping", DNS_RECORD.anchor());
        return;
    };

    if !block.text.contains(QUALIFIED_DOMAIN) {
        findings.push(Finding::in_block(
            format!("DNS Record Name should use {QUALIFIED_DOMAIN}"),
            block.span,
        ));
    }
}

fn check_custom_domain_output(text: &str, findings: &mut Vec<Finding>) {
    if !text.contains(CUSTOM_DOMAIN_URL.anchor()) {
        findings.push(Finding::new("Missing CustomDomainUrl output"));
        return;
    }

    let Some(block) = CUSTOM_DOMAIN_URL.find(text) else {
        tracing::debug!("{} block has no end, skipping", CUSTOM_DOMAIN_URL.anchor());
        return;
    };

    if !block.text.contains("Condition: HasCustomDomain") {
        findings.push(Finding::in_block(
            "CustomDomainUrl output should have Condition: HasCustomDomain",
            block.span.clone(),
        ));
    }
    if !block.text.contains(CUSTOM_DOMAIN_URL_VALUE) {
        findings.push(Finding::in_block(
            format!("CustomDomainUrl should use {CUSTOM_DOMAIN_URL_VALUE}"),
            block.span,
        ));
    }
}
