//! OWL 2 RL 推論プロファイル
//!
//! このクレートは OWL 2 RL の規則セットを [`RuleProfile`](deduct_rules::RuleProfile)
//! として提供します:
//! - [`OwlRlProfile`]: 等価性・プロパティ・クラス・クラス公理・スキーマの規則表と
//!   データ型規則
//! - [`OwlRlExtension`]: RDFS との組み合わせ、自己制約、基数の近道、
//!   ファセット付き制約データ型
//!
//! 矛盾はエラーとして記録され、推論は継続します。

pub mod axioms;
pub mod datatypes;
pub mod extension;
pub mod profile;
pub mod restricted;
pub mod rules;

pub use axioms::owl_rl_axioms;
pub use extension::OwlRlExtension;
pub use profile::OwlRlProfile;
pub use restricted::{FacetError, RestrictedDatatype};
pub use rules::owl_rl_rules;
