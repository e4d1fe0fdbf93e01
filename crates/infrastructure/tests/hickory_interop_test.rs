use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use mockapetris_application::use_cases::ResolveQueryUseCase;
use mockapetris_domain::{RecordClass, RecordType as WireRecordType};
use mockapetris_infrastructure::dns::{decode_query, DnsServerHandler};
use mockapetris_infrastructure::store::InMemoryRecordStore;
use std::sync::Arc;

fn hickory_query(id: u16, name: &str, record_type: RecordType) -> Vec<u8> {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_ascii(name).unwrap(), record_type));
    message.to_vec().unwrap()
}

fn handler() -> DnsServerHandler {
    let store = Arc::new(InMemoryRecordStore::with_records([(
        "google.com",
        "216.58.196.142",
    )]));
    DnsServerHandler::new(Arc::new(ResolveQueryUseCase::new(store, 0)))
}

#[test]
fn test_decodes_query_built_by_hickory() {
    let query = decode_query(&hickory_query(0x4242, "google.com.", RecordType::A)).unwrap();

    assert_eq!(query.id, 0x4242);
    assert!(query.recursion_desired);
    assert_eq!(query.name(), "google.com");
    assert_eq!(query.question.record_type, WireRecordType::A);
    assert_eq!(query.question.record_class, RecordClass::IN);
}

#[tokio::test]
async fn test_hickory_parses_answered_reply() {
    let request = hickory_query(0x1001, "google.com.", RecordType::A);
    let wire = handler()
        .handle_raw(&request, "127.0.0.1:5353".parse().unwrap())
        .await
        .expect("reply expected");

    let reply = Message::from_vec(&wire).unwrap();

    assert_eq!(reply.id(), 0x1001);
    assert_eq!(reply.message_type(), MessageType::Response);
    assert!(reply.authoritative());
    assert!(reply.recursion_desired());
    assert!(!reply.recursion_available());
    assert_eq!(reply.response_code(), ResponseCode::NoError);
    assert_eq!(reply.queries().len(), 1);
    assert_eq!(reply.answers().len(), 1);

    let answer = &reply.answers()[0];
    assert_eq!(answer.record_type(), RecordType::A);
    assert_eq!(*answer.name(), Name::from_ascii("google.com.").unwrap());
    assert_eq!(answer.ttl(), 0);
}

#[tokio::test]
async fn test_hickory_parses_empty_reply() {
    let request = hickory_query(0x1002, "unknown.test.", RecordType::A);
    let wire = handler()
        .handle_raw(&request, "127.0.0.1:5353".parse().unwrap())
        .await
        .expect("reply expected");

    let reply = Message::from_vec(&wire).unwrap();

    assert_eq!(reply.id(), 0x1002);
    assert_eq!(reply.response_code(), ResponseCode::NoError);
    assert!(reply.answers().is_empty());
    assert_eq!(
        reply.queries()[0].name(),
        &Name::from_ascii("unknown.test.").unwrap()
    );
}
