use mockapetris_application::use_cases::{
    DeleteRecordUseCase, GetRecordUseCase, SetRecordUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub set_record: Arc<SetRecordUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
    pub get_record: Arc<GetRecordUseCase>,
}
