use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// A slice of the template that starts at an anchor key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
}

/// Finds a block by its anchor key and the pattern that ends it.
///
/// The block runs from the first occurrence of `anchor` up to, but not
/// including, the first place after the anchor where `terminator` matches.
/// Without a terminator match there is no block.
#[derive(Debug)]
pub struct BlockPattern {
    anchor: &'static str,
    terminator: Regex,
}

impl BlockPattern {
    pub fn new(anchor: &'static str, terminator: &str) -> Self {
        Self {
            anchor,
            terminator: Regex::new(terminator).expect("Invalid block terminator regex"),
        }
    }

    pub fn anchor(&self) -> &'static str {
        self.anchor
    }

    pub fn find<'a>(&self, text: &'a str) -> Option<Block<'a>> {
        let start = text.find(self.anchor)?;
        let body = start + self.anchor.len();
        let end = body + self.terminator.find(&text[body..])?.start();

        Some(Block {
            text: &text[start..end],
            span: start..end,
        })
    }
}

/// `HasCustomDomain:` runs until the next top-level key (`Globals`, `Resources`, ...).
pub static CUSTOM_DOMAIN_CONDITION: Lazy<BlockPattern> =
    Lazy::new(|| BlockPattern::new("HasCustomDomain:", r"\n\w"));

/// `Aliases:` runs until the next sibling of `DistributionConfig` children.
pub static CLOUDFRONT_ALIASES: Lazy<BlockPattern> =
    Lazy::new(|| BlockPattern::new("Aliases:", r"\n {8}\w"));

/// `DNSRecord:` runs until the next resource or the `Outputs` section.
pub static DNS_RECORD: Lazy<BlockPattern> =
    Lazy::new(|| BlockPattern::new("DNSRecord:", r"\n  \w|\nOutputs"));

/// `CustomDomainUrl:` runs until the next output or the end of the file.
///
/// The end-of-file case needs a trailing newline (or one trailing blank line).
pub static CUSTOM_DOMAIN_URL: Lazy<BlockPattern> =
    Lazy::new(|| BlockPattern::new("CustomDomainUrl:", r"\n  \w|\n\n?\z"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_anchor_has_no_block() {
        assert_eq!(DNS_RECORD.find("Resources:\n  Bucket:\n"), None);
    }

    #[test]
    fn test_missing_terminator_has_no_block() {
        let text = "Conditions:\n  HasCustomDomain: !And\n    - !Condition HasHostedZone";
        assert_eq!(CUSTOM_DOMAIN_CONDITION.find(text), None);
    }

    #[test]
    fn test_condition_block_stops_at_next_top_level_key() {
        let text = "Conditions:\n  HasCustomDomain: !And\n    - !Condition HasHostedZone\n\nGlobals:\n  Function:\n";
        let block = CUSTOM_DOMAIN_CONDITION.find(text).unwrap();

        assert_eq!(
            block.text,
            "HasCustomDomain: !And\n    - !Condition HasHostedZone\n"
        );
        assert_eq!(&text[block.span.clone()], block.text);
    }

    #[test]
    fn test_aliases_block_ignores_deeper_indentation() {
        let text = "      DistributionConfig:\n        Aliases:\n          - www.example.com\n        Enabled: true\n";
        let block = CLOUDFRONT_ALIASES.find(text).unwrap();

        assert_eq!(block.text, "Aliases:\n          - www.example.com");
    }

    #[test]
    fn test_dns_record_block_stops_at_outputs() {
        let text = "  DNSRecord:\n    Type: AWS::Route53::RecordSet\nOutputs:\n  Url:\n";
        let block = DNS_RECORD.find(text).unwrap();

        assert_eq!(block.text, "DNSRecord:\n    Type: AWS::Route53::RecordSet");
    }

    #[test]
    fn test_output_block_stops_at_next_output() {
        let text = "Outputs:\n  CustomDomainUrl:\n    Value: x\n  Other:\n    Value: y\n";
        let block = CUSTOM_DOMAIN_URL.find(text).unwrap();

        assert_eq!(block.text, "CustomDomainUrl:\n    Value: x");
    }

    #[test]
    fn test_output_block_runs_to_final_newline() {
        let text = "Outputs:\n  CustomDomainUrl:\n    Value: x\n";
        let block = CUSTOM_DOMAIN_URL.find(text).unwrap();

        assert_eq!(block.text, "CustomDomainUrl:\n    Value: x");
        assert_eq!(block.span.end, text.len() - 1);
    }

    #[test]
    fn test_output_block_stops_before_trailing_blank_line() {
        let text = "Outputs:\n  CustomDomainUrl:\n    Value: x\n\n";
        let block = CUSTOM_DOMAIN_URL.find(text).unwrap();

        assert_eq!(block.text, "CustomDomainUrl:\n    Value: x");
    }

    #[test]
    fn test_output_block_without_trailing_newline_is_not_found() {
        let text = "Outputs:\n  CustomDomainUrl:\n    Value: x";
        assert_eq!(CUSTOM_DOMAIN_URL.find(text), None);
    }

    #[test]
    fn test_first_anchor_occurrence_wins() {
        let text = "  DNSRecord:\n    Name: first\n  DNSRecord:\n    Name: second\n  Next:\n";
        let block = DNS_RECORD.find(text).unwrap();

        assert_eq!(block.text, "DNSRecord:\n    Name: first");
        assert_eq!(block.span.start, 2);
    }
}
