// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Hostname and base-domain heuristics

/// Extract the base domain of a hostname: its last two dot-separated labels
///
/// `a.b.example.com` yields `example.com`. Hostnames with fewer than two
/// labels (`localhost`, a bare word, the empty string) yield `None` and
/// therefore never match a configured internal domain.
///
/// Limitation: only single-part top-level domains (`.com`, `.nl`) are
/// supported. Multi-part TLDs (`.co.uk`) yield the wrong base domain
/// (`co.uk`); callers must not rely on this heuristic for those.
pub fn extract_base_domain(hostname: &str) -> Option<String> {
    let labels: Vec<&str> = hostname.split('.').filter(|l| !l.is_empty()).collect();
    if labels.len() < 2 {
        return None;
    }
    Some(labels[labels.len() - 2..].join("."))
}

/// Compare two hostnames, tolerating an optional `www.` prefix on either
pub fn hostnames_match(a: &str, b: &str) -> bool {
    strip_www(a).eq_ignore_ascii_case(strip_www(b))
}

fn strip_www(hostname: &str) -> &str {
    hostname.strip_prefix("www.").unwrap_or(hostname)
}
