//! Shared helpers for front-desk integration tests.

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::{ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, HttpServer, web};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use url::Url;

use frontdesk::Trace;
use frontdesk::domain::ports::SyncNotifier;
use frontdesk::inbound::http::configure;
use frontdesk::inbound::http::state::HttpState;
use frontdesk::outbound::memory::InMemoryStore;
use frontdesk::outbound::webhook::sync_notifier_for;
use frontdesk::test_support::MutableClock;

/// Bodies received by a webhook sink, in arrival order.
pub type Received = Arc<Mutex<Vec<Value>>>;

/// Local stand-in for the spreadsheet webhook.
pub struct WebhookSink {
    pub url: Url,
    pub handle: ServerHandle,
    pub received: Received,
}

impl WebhookSink {
    /// Start a sink that records each JSON body and answers `200 OK`.
    pub fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        let received: Received = Arc::default();
        let sink = received.clone();

        let server = HttpServer::new(move || {
            let sink = sink.clone();
            App::new().route(
                "/exec",
                web::post().to(move |body: web::Json<Value>| {
                    let sink = sink.clone();
                    async move {
                        sink.lock().expect("sink lock").push(body.into_inner());
                        HttpResponse::Ok().finish()
                    }
                }),
            )
        })
        .workers(1)
        .listen(listener)
        .expect("listen")
        .run();
        let handle = server.handle();
        actix_rt::spawn(server);

        Self {
            url: Url::parse(&format!("http://{addr}/exec")).expect("valid url"),
            handle,
            received,
        }
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.received.lock().expect("sink lock").clone()
    }
}

/// Fixed instant the integration clock starts at.
pub fn opening_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 20, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Store, clock, and handler state wired the way the server wires them.
pub struct FrontDesk {
    pub clock: Arc<MutableClock>,
    pub store: Arc<InMemoryStore>,
    pub state: HttpState,
}

impl FrontDesk {
    pub fn with_webhook(url: Option<Url>) -> Self {
        let clock = Arc::new(MutableClock::new(opening_time()));
        let store = Arc::new(InMemoryStore::new(clock.clone()));
        let notifier: Arc<dyn SyncNotifier> =
            sync_notifier_for(url, Duration::from_secs(5)).expect("notifier");
        let state = HttpState::over_store(store.clone(), notifier, clock.clone());
        Self {
            clock,
            store,
            state,
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(self.state.clone()))
            .wrap(Trace)
            .configure(configure)
    }
}
