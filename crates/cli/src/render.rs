use praxos_core::domain::recommendation::VaultRecommendation;
use praxos_core::risk::RiskSignature;
use std::fmt::Write;

pub fn recommendations(recs: &[VaultRecommendation]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Found {} vault recommendations:", recs.len());
    for rec in recs {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", rec.vault_name);
        let _ = writeln!(out, "  Match Score: {:.1}/100", rec.match_score);
        let _ = writeln!(out, "  Risk Tier: {}", rec.risk_tier);
        let _ = writeln!(out, "  Expected Yield: {:.2}%", rec.expected_yield);
        let _ = writeln!(out, "  Reasoning: {}", rec.reasoning);
    }
    out
}

pub fn signature(sig: &RiskSignature) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({}) Risk Signature:", sig.asset_address, sig.asset_type);
    let _ = writeln!(out, "  Risk Tier: {}", sig.risk_tier);
    let _ = writeln!(out, "  Annual Yield: {:.2}%", sig.annual_yield);
    let _ = writeln!(
        out,
        "  Maturity: {} days ({:.2} years)",
        sig.maturity_days, sig.duration
    );
    let _ = writeln!(out, "  Credit Score: {:.1}", sig.credit_score);
    let _ = writeln!(out, "  Volatility: {:.2}%", sig.volatility * 100.0);
    let _ = writeln!(out, "  Liquidity Score: {:.1}", sig.liquidity_score);
    let _ = writeln!(out, "  Counterparty Risk: {:.1}", sig.counterparty_risk);
    out
}
