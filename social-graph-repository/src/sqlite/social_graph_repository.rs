//! SQLite implementation of the social graph repository.
//!
//! People and clubs live in the `persons` and `clubs` tables; memberships and
//! friendships are join tables carrying a `position` column that records the
//! order in which the edge was created. Queries order by that column.
//!
//! A load runs inside a single transaction: the tables are cleared, the planned
//! rows are inserted in bulk, and the transaction commits only if every step
//! succeeded.
use std::str::FromStr;

use async_trait::async_trait;
use social_graph_shared::LoadPlan;
use social_graph_shared::types::{
    Club, Friendship, LoadSummary, Membership, Person, PersonRecord, StoreStats,
};
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, Transaction};
use tracing::{debug, info};

use crate::{SocialGraphRepository, SocialGraphRepositoryError};

static MIGRATOR: Migrator = sqlx::migrate!("src/sqlite/migrations");

/// Rows per multi-row `INSERT`, kept well under SQLite's bound parameter limit.
const INSERT_CHUNK_SIZE: usize = 500;

const PERSON_BY_NAME: &str = "SELECT id FROM persons WHERE name = ?1 ORDER BY id LIMIT 1";

#[derive(sqlx::FromRow)]
struct PersonRow {
    id: i64,
    name: String,
    age: i64,
    gender: String,
    location: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person {
            id: row.id,
            name: row.name,
            age: row.age,
            gender: row.gender,
            location: row.location,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ClubRow {
    id: i64,
    description: String,
}

impl From<ClubRow> for Club {
    fn from(row: ClubRow) -> Self {
        Club {
            id: row.id,
            description: row.description,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    persons: i64,
    clubs: i64,
    memberships: i64,
    friendships: i64,
}

/// SQLite-backed social graph repository.
///
/// The pool holds a single connection. That keeps an in-memory database alive
/// for the lifetime of the repository and serialises loads against queries.
pub struct SqliteSocialGraphRepository {
    pool: SqlitePool,
}

impl SqliteSocialGraphRepository {
    /// Creates a repository on top of an existing pool, applying migrations.
    ///
    /// # Arguments
    ///
    /// * `pool` - SQLite connection pool
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteSocialGraphRepository)` - Ready-to-use repository instance
    /// * `Err(SocialGraphRepositoryError)` - Migrations could not be applied
    pub async fn new(pool: SqlitePool) -> Result<Self, SocialGraphRepositoryError> {
        MIGRATOR.run(&pool).await?;
        Ok(Self { pool })
    }

    /// Opens the database at `database_url` and applies migrations.
    ///
    /// File databases are created if missing. `sqlite::memory:` gives a private
    /// in-memory database.
    pub async fn connect(database_url: &str) -> Result<Self, SocialGraphRepositoryError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        debug!(database_url, "Connected to SQLite");
        Self::new(pool).await
    }

    /// Opens a fresh in-memory database.
    pub async fn in_memory() -> Result<Self, SocialGraphRepositoryError> {
        Self::connect("sqlite::memory:").await
    }

    /// Returns the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn clear_tx(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), SocialGraphRepositoryError> {
        for table in ["friendships", "club_members", "clubs", "persons"] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }

    async fn insert_persons_tx(
        &self,
        persons: &[Person],
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), SocialGraphRepositoryError> {
        for chunk in persons.chunks(INSERT_CHUNK_SIZE) {
            let mut query_builder =
                QueryBuilder::<Sqlite>::new("INSERT INTO persons (id, name, age, gender, location) ");
            query_builder.push_values(chunk, |mut b, person| {
                b.push_bind(person.id)
                    .push_bind(person.name.clone())
                    .push_bind(person.age)
                    .push_bind(person.gender.clone())
                    .push_bind(person.location.clone());
            });
            query_builder.build().execute(&mut **tx).await?;
        }
        Ok(())
    }

    async fn insert_clubs_tx(
        &self,
        clubs: &[Club],
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), SocialGraphRepositoryError> {
        for chunk in clubs.chunks(INSERT_CHUNK_SIZE) {
            let mut query_builder = QueryBuilder::<Sqlite>::new("INSERT INTO clubs (id, description) ");
            query_builder.push_values(chunk, |mut b, club| {
                b.push_bind(club.id).push_bind(club.description.clone());
            });
            query_builder.build().execute(&mut **tx).await?;
        }
        Ok(())
    }

    async fn insert_memberships_tx(
        &self,
        memberships: &[Membership],
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), SocialGraphRepositoryError> {
        let positioned: Vec<(i64, &Membership)> = (0_i64..).zip(memberships).collect();
        for chunk in positioned.chunks(INSERT_CHUNK_SIZE) {
            let mut query_builder =
                QueryBuilder::<Sqlite>::new("INSERT INTO club_members (person_id, club_id, position) ");
            query_builder.push_values(chunk, |mut b, (position, membership)| {
                b.push_bind(membership.person_id)
                    .push_bind(membership.club_id)
                    .push_bind(*position);
            });
            query_builder.build().execute(&mut **tx).await?;
        }
        Ok(())
    }

    async fn insert_friendships_tx(
        &self,
        friendships: &[Friendship],
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), SocialGraphRepositoryError> {
        let positioned: Vec<(i64, &Friendship)> = (0_i64..).zip(friendships).collect();
        for chunk in positioned.chunks(INSERT_CHUNK_SIZE) {
            let mut query_builder =
                QueryBuilder::<Sqlite>::new("INSERT INTO friendships (person_id, friend_id, position) ");
            query_builder.push_values(chunk, |mut b, (position, friendship)| {
                b.push_bind(friendship.person_id)
                    .push_bind(friendship.friend_id)
                    .push_bind(*position);
            });
            query_builder.build().execute(&mut **tx).await?;
        }
        Ok(())
    }

    async fn fetch_persons(
        &self,
        sql: &str,
        key: &str,
    ) -> Result<Vec<Person>, SocialGraphRepositoryError> {
        let rows = sqlx::query_as::<_, PersonRow>(sql)
            .bind(key)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Person::from).collect())
    }
}

#[async_trait]
impl SocialGraphRepository for SqliteSocialGraphRepository {
    /// Plans the load, then clears and repopulates every table in one transaction.
    ///
    /// Planning fails before the transaction starts when the records are
    /// malformed, and any database failure rolls the transaction back, so the
    /// previous generation survives a failed load.
    async fn load(
        &self,
        records: &[PersonRecord],
    ) -> Result<LoadSummary, SocialGraphRepositoryError> {
        let plan = LoadPlan::build(records)?;

        let mut tx = self.pool.begin().await?;
        self.clear_tx(&mut tx).await?;
        self.insert_persons_tx(&plan.persons, &mut tx).await?;
        self.insert_clubs_tx(&plan.clubs, &mut tx).await?;
        self.insert_memberships_tx(&plan.memberships, &mut tx).await?;
        self.insert_friendships_tx(&plan.friendships, &mut tx).await?;
        tx.commit().await?;

        let summary = plan.summary();
        info!(
            persons = summary.persons,
            clubs = summary.clubs,
            memberships = summary.memberships,
            friendships = summary.friendships,
            dangling_friends = summary.dangling_friends,
            "Social graph loaded"
        );
        Ok(summary)
    }

    async fn get_club_members(
        &self,
        description: &str,
    ) -> Result<Vec<Person>, SocialGraphRepositoryError> {
        self.fetch_persons(
            r#"
            SELECT p.id, p.name, p.age, p.gender, p.location
            FROM club_members m
            JOIN clubs c ON c.id = m.club_id
            JOIN persons p ON p.id = m.person_id
            WHERE c.description = ?1
            ORDER BY m.position
            "#,
            description,
        )
        .await
    }

    async fn get_friends_of(
        &self,
        person_name: &str,
    ) -> Result<Vec<Person>, SocialGraphRepositoryError> {
        let sql = format!(
            r#"
            SELECT p.id, p.name, p.age, p.gender, p.location
            FROM friendships f
            JOIN persons p ON p.id = f.friend_id
            WHERE f.person_id = ({PERSON_BY_NAME})
            ORDER BY f.position
            "#
        );
        self.fetch_persons(&sql, person_name).await
    }

    async fn get_admirers_of(
        &self,
        person_name: &str,
    ) -> Result<Vec<Person>, SocialGraphRepositoryError> {
        let sql = format!(
            r#"
            SELECT p.id, p.name, p.age, p.gender, p.location
            FROM friendships f
            JOIN persons p ON p.id = f.person_id
            WHERE f.friend_id = ({PERSON_BY_NAME})
            ORDER BY f.position
            "#
        );
        self.fetch_persons(&sql, person_name).await
    }

    async fn get_clubs_of(
        &self,
        person_name: &str,
    ) -> Result<Vec<Club>, SocialGraphRepositoryError> {
        let sql = format!(
            r#"
            SELECT c.id, c.description
            FROM club_members m
            JOIN clubs c ON c.id = m.club_id
            WHERE m.person_id = ({PERSON_BY_NAME})
            ORDER BY m.position
            "#
        );
        let rows = sqlx::query_as::<_, ClubRow>(&sql)
            .bind(person_name)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Club::from).collect())
    }

    async fn stats(&self) -> Result<StoreStats, SocialGraphRepositoryError> {
        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM persons) AS persons,
                (SELECT COUNT(*) FROM clubs) AS clubs,
                (SELECT COUNT(*) FROM club_members) AS memberships,
                (SELECT COUNT(*) FROM friendships) AS friendships
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(StoreStats {
            persons: row.persons as u64,
            clubs: row.clubs as u64,
            memberships: row.memberships as u64,
            friendships: row.friendships as u64,
        })
    }
}
