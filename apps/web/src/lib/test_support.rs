//! Scripted transport and fixtures shared by unit tests.

use super::{
    api::{ApiClient, ApiRequest, ApiResponse, Transport},
    errors::AppError,
    interceptor::ERROR_CONTENT_TYPE,
};
use crate::features::{
    core_data::types::{Account, AccountRef, Circle, Company, CompanyEmployee},
    session::state::Session,
};
use serde_json::{Value, json};
use std::{cell::RefCell, collections::VecDeque, rc::Rc};

pub type TestApi = ApiClient<FakeTransport, Rc<RefCell<Session>>>;

#[derive(Default)]
struct FakeState {
    replies: VecDeque<Result<ApiResponse, AppError>>,
    requests: Vec<ApiRequest>,
}

/// Replays queued replies in order and records every request it sees.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Rc<RefCell<FakeState>>,
}

impl FakeTransport {
    pub fn respond(&self, response: ApiResponse) {
        self.state.borrow_mut().replies.push_back(Ok(response));
    }

    pub fn fail(&self, err: AppError) {
        self.state.borrow_mut().replies.push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    /// Paths of the recorded requests, prefixed with the method.
    pub fn calls(&self) -> Vec<String> {
        self.state
            .borrow()
            .requests
            .iter()
            .map(|request| format!("{} {}", request.method.as_str(), request.path))
            .collect()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request);
        state
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Network("no scripted reply".to_string())))
    }
}

/// Builds a client over a fresh transport and an empty session.
pub fn test_api() -> (TestApi, FakeTransport, Rc<RefCell<Session>>) {
    let transport = FakeTransport::default();
    let session = Rc::new(RefCell::new(Session::default()));
    let api = ApiClient::new(transport.clone(), session.clone());
    (api, transport, session)
}

pub fn json_response(status: u16, body: &Value) -> ApiResponse {
    ApiResponse {
        status,
        content_type: Some("application/json".to_string()),
        body: body.to_string(),
    }
}

pub fn plain_response(status: u16, body: &str) -> ApiResponse {
    ApiResponse {
        status,
        content_type: Some("text/plain".to_string()),
        body: body.to_string(),
    }
}

pub fn error_envelope(status: u16, message: Value) -> ApiResponse {
    ApiResponse {
        status,
        content_type: Some(ERROR_CONTENT_TYPE.to_string()),
        body: json!({ "message": message }).to_string(),
    }
}

pub fn circle(id: i64, name: &str) -> Circle {
    Circle {
        id,
        name: name.to_string(),
        description: None,
    }
}

pub fn account(id: i64, username: &str, circles: Vec<Circle>) -> Account {
    Account {
        id,
        username: username.to_string(),
        email: Some(format!("{username}@bitraf.no")),
        name: None,
        phone: None,
        circles,
    }
}

pub fn company(id: Option<i64>, name: &str, employees: &[&Account]) -> Company {
    Company {
        id,
        name: name.to_string(),
        employees: employees
            .iter()
            .map(|account| CompanyEmployee {
                id: None,
                account: AccountRef::from(*account),
            })
            .collect(),
    }
}
