use std::sync::Arc;

use emotes::{ClassifierBackend, EmoteCatalog, EmoteFinder, MetadataSource, PublicConfig};

pub struct HandlerState<C, M>
where
    C: ClassifierBackend + 'static,
    M: MetadataSource + 'static,
{
    pub finder: Arc<EmoteFinder<C, M>>,

    pub catalog: Arc<EmoteCatalog>,

    pub public_config: Arc<PublicConfig>,
}

impl<C, M> HandlerState<C, M>
where
    C: ClassifierBackend + 'static,
    M: MetadataSource + 'static,
{
    pub fn new(
        finder: Arc<EmoteFinder<C, M>>,
        catalog: EmoteCatalog,
        public_config: PublicConfig,
    ) -> Self {
        Self {
            finder,
            catalog: Arc::new(catalog),
            public_config: Arc::new(public_config),
        }
    }
}

impl<C, M> Clone for HandlerState<C, M>
where
    C: ClassifierBackend + 'static,
    M: MetadataSource + 'static,
{
    fn clone(&self) -> Self {
        Self {
            finder: Arc::clone(&self.finder),
            catalog: Arc::clone(&self.catalog),
            public_config: Arc::clone(&self.public_config),
        }
    }
}
