use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxPortfolioRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxContactRepo {
    pub pool: PgPool,
}
