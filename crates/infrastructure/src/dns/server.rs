use super::{HandlerOutcome, ZoneQueryHandler};
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use std::sync::Arc;
use tracing::debug;

/// Turns a parsed request into the response sent back to the client.
///
/// The directory is authoritative for its zone: misses there are NXDOMAIN
/// (or an empty NOERROR when the name or the apex exists), and anything the
/// zone does not serve is REFUSED.
pub struct DnsServerHandler {
    handler: Arc<ZoneQueryHandler>,
}

impl DnsServerHandler {
    pub fn new(handler: Arc<ZoneQueryHandler>) -> Self {
        Self { handler }
    }

    pub fn build_response(&self, request: &Message) -> Message {
        let mut response = Message::new();
        response.set_id(request.id());
        response.set_message_type(MessageType::Response);
        response.set_op_code(request.op_code());
        response.set_recursion_desired(request.recursion_desired());
        response.set_recursion_available(false);

        for question in request.queries() {
            response.add_query(question.clone());
        }

        if request.op_code() != OpCode::Query {
            response.set_response_code(ResponseCode::NotImp);
            return response;
        }

        let Some(question) = request.queries().first() else {
            response.set_response_code(ResponseCode::FormErr);
            return response;
        };

        match self.handler.handle(question) {
            HandlerOutcome::Answered(records) => {
                debug!(
                    qname = %question.name(),
                    record_type = ?question.query_type(),
                    answers = records.len(),
                    "Answered from directory"
                );
                response.set_authoritative(true);
                response.set_response_code(ResponseCode::NoError);
                for record in records {
                    response.add_answer(record);
                }
            }
            HandlerOutcome::NoData => {
                response.set_authoritative(true);
                response.set_response_code(ResponseCode::NoError);
            }
            HandlerOutcome::NxDomain => {
                response.set_authoritative(true);
                response.set_response_code(ResponseCode::NXDomain);
            }
            HandlerOutcome::Fallthrough => {
                debug!(qname = %question.name(), "Query outside zone refused");
                response.set_response_code(ResponseCode::Refused);
            }
        }

        response
    }
}
