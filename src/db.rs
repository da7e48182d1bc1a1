use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbErr, Statement, TransactionTrait, Value,
};

/// A schema version. Applied at most once, recorded in `schema_migrations`.
struct Migration {
    version: i64,
    name: &'static str,
    statements: &'static [&'static str],
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_customers",
        statements: &[
            r#"
            CREATE TABLE IF NOT EXISTS customer (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(50) NOT NULL,
                email VARCHAR(120) NOT NULL UNIQUE COLLATE NOCASE,
                phone VARCHAR(20) NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS customer_account (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username VARCHAR(50) NOT NULL UNIQUE,
                password VARCHAR(120) NOT NULL,
                customer_id INTEGER UNIQUE,
                FOREIGN KEY (customer_id) REFERENCES customer(id) ON DELETE CASCADE
            )
            "#,
        ],
    },
    Migration {
        version: 2,
        name: "create_products_and_orders",
        statements: &[
            r#"
            CREATE TABLE IF NOT EXISTS product (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(100) NOT NULL,
                price REAL NOT NULL CHECK (price >= 0)
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS "order" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                order_date TEXT NOT NULL,
                customer_id INTEGER NOT NULL,
                FOREIGN KEY (customer_id) REFERENCES customer(id) ON DELETE CASCADE
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS order_products (
                order_id INTEGER NOT NULL,
                product_id INTEGER NOT NULL,
                PRIMARY KEY (order_id, product_id),
                FOREIGN KEY (order_id) REFERENCES "order"(id) ON DELETE CASCADE,
                FOREIGN KEY (product_id) REFERENCES product(id) ON DELETE CASCADE
            )
            "#,
            r#"CREATE INDEX IF NOT EXISTS idx_order_customer_id ON "order"(customer_id)"#,
        ],
    },
];

/// Open a connection pool without touching the schema.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    tracing::debug!("Connected to {}", database_url);
    Ok(db)
}

/// Connect and bring the schema up to date.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = connect(database_url).await?;
    migrate(&db).await?;
    Ok(db)
}

/// Apply every migration not yet recorded in the ledger, each in its own transaction.
///
/// Returns the versions applied by this call (empty when already up to date).
pub async fn migrate(db: &DatabaseConnection) -> Result<Vec<i64>, DbErr> {
    let backend = db.get_database_backend();

    db.execute(Statement::from_string(
        backend,
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    let applied = applied_versions(db).await?;
    let mut newly_applied = Vec::new();

    for migration in MIGRATIONS.iter().filter(|m| !applied.contains(&m.version)) {
        let txn = db.begin().await?;
        for sql in migration.statements {
            txn.execute(Statement::from_string(backend, sql.to_string()))
                .await?;
        }
        txn.execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO schema_migrations (version, name, applied_at) VALUES (?, ?, ?)",
            [
                Value::from(migration.version),
                Value::from(migration.name),
                Value::from(chrono::Utc::now().to_rfc3339()),
            ],
        ))
        .await?;
        txn.commit().await?;

        tracing::info!(
            "Applied migration {} ({})",
            migration.version,
            migration.name
        );
        newly_applied.push(migration.version);
    }

    if newly_applied.is_empty() {
        tracing::debug!("Schema is up to date");
    }

    Ok(newly_applied)
}

/// Versions recorded in the migration ledger, ascending.
pub async fn applied_versions(db: &DatabaseConnection) -> Result<Vec<i64>, DbErr> {
    let rows = db
        .query_all(Statement::from_string(
            db.get_database_backend(),
            "SELECT version FROM schema_migrations ORDER BY version".to_owned(),
        ))
        .await?;

    rows.iter()
        .map(|row| row.try_get::<i64>("", "version"))
        .collect()
}

/// Versions known to this build but missing from the ledger, ascending.
///
/// Read-only: a database without a ledger reports every version as pending.
pub async fn pending_versions(db: &DatabaseConnection) -> Result<Vec<i64>, DbErr> {
    let ledger = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'schema_migrations'"
                .to_owned(),
        ))
        .await?;

    let applied = match ledger {
        Some(_) => applied_versions(db).await?,
        None => Vec::new(),
    };

    Ok(unapplied(&applied))
}

fn unapplied(applied: &[i64]) -> Vec<i64> {
    MIGRATIONS
        .iter()
        .map(|m| m.version)
        .filter(|version| !applied.contains(version))
        .collect()
}
