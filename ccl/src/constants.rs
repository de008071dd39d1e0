use crate::terminal::StyleId;

pub(crate) const ASCII_ART: &str = r#"
       ─────────────────────────────────
       ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇
     AND {  OR {  NOT {  EXISTS  FORALL
       ███████ ccl decomposer ████████
       ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇
       ─────────────────────────────────
"#;

/// File names of saved fragments are `DSL_S<j>.ccl`, numbered from one.
pub(crate) const FRAGMENT_FILE_PREFIX: &str = "DSL_S";
pub(crate) const FRAGMENT_FILE_EXTENSION: &str = "ccl";

pub(crate) const STYLE_LOGO: StyleId = 0;
pub(crate) const STYLE_INFO: StyleId = 1;
pub(crate) const STYLE_CONDITION: StyleId = 2;
pub(crate) const STYLE_EXPRESSION: StyleId = 3;
pub(crate) const STYLE_FRAGMENT: StyleId = 4;
