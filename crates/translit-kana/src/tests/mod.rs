mod custom;

use std::sync::OnceLock;

use crate::KanaConverter;

fn converter() -> &'static KanaConverter {
    static INSTANCE: OnceLock<KanaConverter> = OnceLock::new();
    INSTANCE.get_or_init(KanaConverter::new)
}
