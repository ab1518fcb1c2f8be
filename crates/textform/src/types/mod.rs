mod text;
mod value;
mod variant_id;

pub use text::Text;
pub use value::Value;
pub use variant_id::VariantId;
