//! PostgreSQL schema migrations for marketmood storage.

use anyhow::Result;
use sqlx::PgPool;

/// Run all PostgreSQL migrations. Idempotent.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS instruments (
            id SERIAL PRIMARY KEY,
            symbol TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            current_price DOUBLE PRECISION NOT NULL,
            price_change_24h DOUBLE PRECISION NOT NULL,
            market_cap DOUBLE PRECISION,
            volume_24h DOUBLE PRECISION,
            last_updated TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_instruments_last_updated ON instruments (last_updated)",
    )
    .execute(pool)
    .await?;

    // Append-only. Score/confidence bounds and the closed category set are
    // enforced here as well as at the API boundary; rows referencing a
    // deleted instrument go away with it.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS observations (
            id SERIAL PRIMARY KEY,
            instrument_id INTEGER NOT NULL REFERENCES instruments(id) ON DELETE CASCADE,
            score DOUBLE PRECISION NOT NULL CHECK (score >= -1.0 AND score <= 1.0),
            category TEXT NOT NULL CHECK (category IN
                ('very_negative', 'negative', 'neutral', 'positive', 'very_positive')),
            confidence DOUBLE PRECISION NOT NULL CHECK (confidence >= 0.0 AND confidence <= 1.0),
            source TEXT NOT NULL,
            note TEXT,
            recorded_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_obs_instrument ON observations (instrument_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_obs_recorded ON observations (recorded_at DESC)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_obs_instrument_recorded
         ON observations (instrument_id, recorded_at DESC)",
    )
    .execute(pool)
    .await?;

    tracing::info!("PostgreSQL migrations completed");
    Ok(())
}
