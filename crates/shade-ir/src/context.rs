use shade_core::{DiagnosticSink, Settings};

use crate::types::TypeRegistry;

/// Everything a smart constructor consults: configuration, builtin types,
/// and the diagnostic sink. One per compilation unit, passed by reference.
#[derive(Debug, Default)]
pub struct Context {
    pub settings: Settings,
    pub types: TypeRegistry,
    pub errors: DiagnosticSink,
}

impl Context {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            types: TypeRegistry::new(),
            errors: DiagnosticSink::new(),
        }
    }
}
