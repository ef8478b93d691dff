//! tests/api/helpers.rs

use anyhow::Error;
use aos::configuration::{get_configuration, DatabaseSettings};
use aos::domain::{AttendanceStatus, Role};
use aos::startup::{get_connection_pool, Application};
use aos::telemetry::{get_subscriber, init_subscriber};
use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHasher, Version};
use async_once_cell::OnceCell;
use fake::faker::name::en::Name;
use fake::Fake;
use lazy_static::lazy_static;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use sqlx::{Connection, Executor, PgConnection, PgPool, Row};
use uuid::Uuid;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the type returned by `get_subscriber`,
    // therefore both branches call `init_subscriber` themselves.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

lazy_static! {
    static ref CLEANUP_DB: OnceCell<Result<(), Error>> = OnceCell::new();
}

pub struct TestUser {
    pub user_id: Uuid,
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

impl TestUser {
    pub fn generate(role: Role) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            username: Uuid::new_v4().to_string(),
            password: Uuid::new_v4().to_string(),
            full_name: Name().fake(),
            role,
        }
    }

    pub async fn store(&self, pool: &PgPool) {
        let salt = SaltString::generate(&mut rand::thread_rng());
        // We don't care about the exact Argon2 parameters here
        // given that it's for testing purposes!
        let password_hash = Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(15_000, 2, 1, None).unwrap(),
        )
        .hash_password(self.password.as_bytes(), &salt)
        .unwrap()
        .to_string();
        sqlx::query(
            "INSERT INTO users (user_id, username, password_hash)
            VALUES ($1, $2, $3)",
        )
        .bind(self.user_id)
        .bind(&self.username)
        .bind(password_hash)
        .execute(pool)
        .await
        .expect("Failed to create test user.");
        sqlx::query(
            "INSERT INTO profiles (id, full_name, role)
            VALUES ($1, $2, $3)",
        )
        .bind(self.user_id)
        .bind(&self.full_name)
        .bind(self.role.as_str())
        .execute(pool)
        .await
        .expect("Failed to create test profile.");
    }

    pub async fn login(&self, app: &TestApp) -> reqwest::Response {
        app.post_login(&serde_json::json!({
            "username": &self.username,
            "password": &self.password
        }))
        .await
    }
}

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub gateway_server: MockServer,
    pub test_user: TestUser,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Store an additional user with a profile of `role`.
    pub async fn add_user(&self, role: Role) -> TestUser {
        let user = TestUser::generate(role);
        user.store(&self.db_pool).await;
        user
    }

    /// Log out the current client and log in as `user`.
    pub async fn switch_user(&mut self, user: TestUser) {
        self.post_logout().await;
        self.test_user = user;
        self.test_user.login(self).await;
    }

    pub async fn add_course(&self, code: &str, teacher_id: Uuid) -> Uuid {
        let course_id = Uuid::new_v4();
        sqlx::query("INSERT INTO courses (id, name, code, teacher_id) VALUES ($1, $2, $3, $4)")
            .bind(course_id)
            .bind(format!("Course {}", code))
            .bind(code)
            .bind(teacher_id)
            .execute(&self.db_pool)
            .await
            .expect("Failed to create course.");
        course_id
    }

    pub async fn enroll(&self, student_id: Uuid, course_id: Uuid) {
        sqlx::query("INSERT INTO enrollments (student_id, course_id) VALUES ($1, $2)")
            .bind(student_id)
            .bind(course_id)
            .execute(&self.db_pool)
            .await
            .expect("Failed to enroll student.");
    }

    pub async fn record_attendance(
        &self,
        student_id: Uuid,
        course_id: Uuid,
        status: AttendanceStatus,
    ) {
        sqlx::query(
            "INSERT INTO attendance (id, student_id, course_id, status) VALUES ($1, $2, $3, $4)",
        )
        .bind(Uuid::new_v4())
        .bind(student_id)
        .bind(course_id)
        .bind(status.as_str())
        .execute(&self.db_pool)
        .await
        .expect("Failed to record attendance.");
    }

    /// helper for sending a POST /login request
    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(&format!("{}/login", &self.address))
            // This 'reqwest' method makes sure that the body is URL-encoded
            // and the 'Content-Type' header is set accordingly.
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// helper to get Response from url
    pub async fn get_response_from_url(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// helper to get login html
    pub async fn get_login_html(&self) -> String {
        self.get_response_from_url("/login")
            .await
            .text()
            .await
            .unwrap()
    }

    /// helper to get dashboard
    pub async fn get_dashboard(&self) -> reqwest::Response {
        self.get_response_from_url("/dashboard").await
    }

    /// helper to get dashboard html
    pub async fn get_dashboard_html(&self) -> String {
        self.get_dashboard().await.text().await.unwrap()
    }

    /// helper to log out
    pub async fn post_logout(&self) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/logout", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// helper to request a report
    pub async fn post_generate_report(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/generate-report", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

// Little helper function to assert redirected location
pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}

/// Text of the first element matching `selector`
pub fn select_text(html: &str, selector: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Labels of the sidebar menu in display order
pub fn menu_labels(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("ol#menu li a").unwrap();
    document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect()
}

/// Spin up an instance of our application
/// with a logged out test user of `role`.
pub async fn spawn_app(role: Role) -> TestApp {
    spawn_app_with_gateway_key(role, Some("test-gateway-key")).await
}

pub async fn spawn_app_with_gateway_key(role: Role, api_key: Option<&str>) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);
    if let Err(r) = CLEANUP_DB.get_or_init(cleanup_db()).await {
        panic!("clean up of test databases failed:\n{}", r);
    }

    // Launch a mock server to stand in for the text generation gateway
    let gateway_server = MockServer::start().await;

    // Randomise configuration to ensure test isolation
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // use different database for each test case
        c.database.database_name = Uuid::new_v4().to_string();
        // use a random OS port
        c.application.port = 0;
        // use the mock server as gateway
        c.report_gateway.base_url = gateway_server.uri();
        c.report_gateway.api_key = api_key.map(|key| secrecy::Secret::new(key.to_string()));
        c.report_gateway.timeout_milliseconds = 2000;
        c
    };

    // Create and migrate the database
    configure_database(&configuration.database).await;

    let application = Application::build(configuration.clone())
        .await
        .expect("Failed to build application");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    let test_app = TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        db_pool: get_connection_pool(&configuration.database),
        gateway_server,
        test_user: TestUser::generate(role),
        api_client: client,
    };
    test_app.test_user.store(&test_app.db_pool).await;
    test_app
}

async fn configure_database(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect_with(&config.without_db())
        .await
        .expect("Failed to connect to Postgres");

    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect_with(config.with_db())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database.");

    connection_pool
}

async fn cleanup_db() -> Result<(), Error> {
    let database = get_configuration()?.database;
    // Connect to postgres without db
    let mut connection = PgConnection::connect_with(&database.without_db()).await?;

    let rows = connection
        .fetch_all("SELECT datname FROM pg_database WHERE datistemplate = false")
        .await?;

    for row in rows {
        let database_name: String = row.try_get("datname")?;
        if Uuid::parse_str(&database_name).is_ok() {
            // database is Uuid -> test database -> delete it
            let query: &str = &format!(r#"DROP DATABASE IF EXISTS "{}" ( FORCE ) "#, database_name);
            connection.execute(query).await?;
        }
    }
    Ok(())
}
