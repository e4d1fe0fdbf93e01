use mockapetris_application::ports::RecordStore;
use mockapetris_application::use_cases::{
    DeleteRecordUseCase, GetRecordUseCase, ResolveQueryUseCase, SetRecordUseCase,
};
use mockapetris_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub resolve_query: Arc<ResolveQueryUseCase>,
    pub set_record: Arc<SetRecordUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
    pub get_record: Arc<GetRecordUseCase>,
}

impl UseCases {
    /// Every use case shares the one store, so records added through the
    /// control plane are visible to the next DNS lookup.
    pub fn new(store: Arc<dyn RecordStore>, config: &Config) -> Self {
        Self {
            resolve_query: Arc::new(ResolveQueryUseCase::new(
                store.clone(),
                config.dns.answer_ttl,
            )),
            set_record: Arc::new(SetRecordUseCase::new(store.clone())),
            delete_record: Arc::new(DeleteRecordUseCase::new(store.clone())),
            get_record: Arc::new(GetRecordUseCase::new(store)),
        }
    }
}
