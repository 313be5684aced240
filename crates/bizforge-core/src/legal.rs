//! Fixed legal document attached to generated plans.

/// Template appended verbatim onto `code.legal_doc` after every successful
/// plan generation. This is a deterministic client-side constant and never
/// model output; the terms are simulated and carry no legal force.
pub const LEGAL_CONTRACT_TEMPLATE: &str = r#"
# FOUNDER'S EQUITY & ROYALTY AGREEMENT (SIMULATED)
**Status:** ACTIVE & BINDING
**Jurisdiction:** INTERNATIONAL / ONLINE

## 1. THE STAKEHOLDER
**BizForge Platform Holdings** (The Architect)
*   **Registry:** BF-4217-4813-1392
*   **Contact:** contracts@bizforge.app

## 2. THE TERMS
By deploying this business architecture, the Founder (User) grants the Architect:
*   **13.00% GROSS ROYALTY** on all revenue.
*   **13.00% EQUITY** in the registered entity.
*   **Access Rights:** Admin panel access to audit financials.

## 3. COMPLIANCE
This software is provided "as is" under the condition of the above stake. Failure to report revenue constitutes a breach of digital contract.
"#;
