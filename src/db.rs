use std::str::FromStr;

use sqlx::{Connection, PgConnection, Row, postgres::PgConnectOptions};
use tracing::{debug, info};

use crate::{
    cli::ConnectionArgs,
    error::AppResult,
    profile::{ProfileSnapshot, ProfileUpdate, UserId},
};

/// Builds connect options from a URL if given, otherwise from the individual settings
pub fn connect_options(args: &ConnectionArgs) -> AppResult<PgConnectOptions> {
    if let Some(url) = &args.database_url {
        return Ok(PgConnectOptions::from_str(url)?);
    }

    let mut options = PgConnectOptions::new()
        .host(&args.db_host)
        .port(args.db_port)
        .database(&args.db_name)
        .username(&args.db_user);
    if let Some(password) = &args.db_password {
        options = options.password(password);
    }
    Ok(options)
}

/// Opens a single connection, no pool
pub async fn connect(options: &PgConnectOptions) -> AppResult<PgConnection> {
    debug!(
        host = options.get_host(),
        port = options.get_port(),
        database = options.get_database(),
        "connecting to database"
    );
    let conn = PgConnection::connect_with(options).await?;
    info!("Connected to database!");
    Ok(conn)
}

/// Resolves the user id for `email`
pub async fn find_user_id(conn: &mut PgConnection, email: &str) -> AppResult<Option<UserId>> {
    let id = sqlx::query_scalar::<_, i32>(
        r#"
            SELECT
                id
            FROM
                users
            WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(id.map(UserId))
}

/// Writes the four fields to the profile of `user_id`, returning the affected row count.
/// The statement commits on its own.
pub async fn update_profile(
    conn: &mut PgConnection,
    user_id: UserId,
    update: &ProfileUpdate,
) -> AppResult<u64> {
    let result = sqlx::query(
        r#"
            UPDATE
                profiles
            SET
                full_name = $1, linkedin_url = $2, bio = $3, avatar_url = $4
            WHERE
                user_id = $5
        "#,
    )
    .bind(&update.full_name)
    .bind(&update.linkedin_url)
    .bind(&update.bio)
    .bind(&update.avatar_url)
    .bind(user_id.0)
    .execute(&mut *conn)
    .await?;

    info!(user_id = user_id.0, rows = result.rows_affected(), "profile update executed");
    Ok(result.rows_affected())
}

/// Re-reads the displayed fields of the profile of `user_id`
pub async fn fetch_profile(
    conn: &mut PgConnection,
    user_id: UserId,
) -> AppResult<Option<ProfileSnapshot>> {
    let result = sqlx::query(
        r#"
            SELECT
                full_name, linkedin_url, avatar_url
            FROM
                profiles
            WHERE user_id = $1
        "#,
    )
    .bind(user_id.0)
    .fetch_optional(&mut *conn)
    .await?;

    match result {
        Some(row) => Ok(Some(ProfileSnapshot {
            full_name: row.try_get("full_name")?,
            linkedin_url: row.try_get("linkedin_url")?,
            avatar_url: row.try_get("avatar_url")?,
        })),
        None => Ok(None),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::str::FromStr;

    use sqlx::{Connection, PgConnection, postgres::PgConnectOptions};

    /// Connection to `TEST_DATABASE_URL` with session-local `users` and `profiles`
    /// tables shadowing any real ones
    pub async fn temp_schema_connection() -> PgConnection {
        let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
        let options = PgConnectOptions::from_str(&url).expect("parse TEST_DATABASE_URL");
        let mut conn = PgConnection::connect_with(&options).await.expect("connect test database");

        sqlx::query("CREATE TEMP TABLE users (id SERIAL PRIMARY KEY, email TEXT NOT NULL UNIQUE)")
            .execute(&mut conn)
            .await
            .expect("create temp users");
        sqlx::query(
            "CREATE TEMP TABLE profiles (
                id SERIAL PRIMARY KEY,
                user_id INTEGER NOT NULL UNIQUE,
                full_name TEXT,
                linkedin_url TEXT,
                bio TEXT,
                avatar_url TEXT,
                major TEXT
            )",
        )
        .execute(&mut conn)
        .await
        .expect("create temp profiles");

        conn
    }

    pub async fn insert_user(conn: &mut PgConnection, email: &str) -> i32 {
        sqlx::query_scalar::<_, i32>("INSERT INTO users (email) VALUES ($1) RETURNING id")
            .bind(email)
            .fetch_one(&mut *conn)
            .await
            .expect("insert user")
    }

    pub async fn insert_profile(conn: &mut PgConnection, user_id: i32) {
        sqlx::query("INSERT INTO profiles (user_id, full_name, major) VALUES ($1, 'Old Name', 'Economics')")
            .bind(user_id)
            .execute(&mut *conn)
            .await
            .expect("insert profile");
    }

    pub async fn fetch_bio_and_major(conn: &mut PgConnection, user_id: i32) -> (Option<String>, Option<String>) {
        sqlx::query_as::<_, (Option<String>, Option<String>)>(
            "SELECT bio, major FROM profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
        .expect("fetch bio and major")
    }
}
