//! End-to-end tests: CSV text in, query results out, against in-memory SQLite.

use std::io::Write;
use std::sync::Arc;

use social_graph_loader::{LoaderError, SocialGraphLoader};
use social_graph_repository::{SocialGraphRepository, SqliteSocialGraphRepository};

const SCENARIO_CSV: &str = "\
id,first_name,last_name,age,gender,location,clubs,friends
0,John,Rocha,34,Male,\"12 Oak St, Springfield\",['Fitness Club'],[1]
1,Amanda,Norris,29,Female,Shelbyville,['Fitness Club'],[]
2,Casper,Ghost,300,Unknown,Attic,[],\"[0, 41]\"
";

async fn make_loader() -> (SocialGraphLoader, Arc<SqliteSocialGraphRepository>) {
    let repository = Arc::new(SqliteSocialGraphRepository::in_memory().await.unwrap());
    (SocialGraphLoader::new(repository.clone()), repository)
}

fn names(persons: &[social_graph_shared::types::Person]) -> Vec<&str> {
    persons.iter().map(|p| p.name.as_str()).collect()
}

#[tokio::test]
async fn test_csv_scenario_end_to_end() {
    let (loader, repository) = make_loader().await;
    let summary = loader.load_reader(SCENARIO_CSV.as_bytes()).await.unwrap();

    assert_eq!(summary.persons, 3);
    assert_eq!(summary.clubs, 1);
    assert_eq!(summary.friendships, 2);
    assert_eq!(summary.dangling_friends, 1);

    let members = repository.get_club_members("Fitness Club").await.unwrap();
    assert_eq!(names(&members), vec!["John Rocha", "Amanda Norris"]);

    let friends = repository.get_friends_of("John Rocha").await.unwrap();
    assert_eq!(names(&friends), vec!["Amanda Norris"]);

    let admirers = repository.get_admirers_of("John Rocha").await.unwrap();
    assert_eq!(names(&admirers), vec!["Casper Ghost"]);
}

#[tokio::test]
async fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCENARIO_CSV.as_bytes()).unwrap();
    file.flush().unwrap();

    let (loader, repository) = make_loader().await;
    loader.load_path(file.path()).await.unwrap();

    assert_eq!(repository.stats().await.unwrap().persons, 3);
}

#[tokio::test]
async fn test_malformed_csv_keeps_previous_load() {
    let (loader, repository) = make_loader().await;
    loader.load_reader(SCENARIO_CSV.as_bytes()).await.unwrap();

    let broken = "\
id,first_name,last_name,age,gender,location,clubs,friends
7,Eve,Moss,41,Female,Capital City,['Chess',[]
";
    let result = loader.load_reader(broken.as_bytes()).await;
    assert!(matches!(result, Err(LoaderError::InvalidList { column: "clubs", .. })));

    let members = repository.get_club_members("Fitness Club").await.unwrap();
    assert_eq!(members.len(), 2);
}

#[tokio::test]
async fn test_duplicate_person_ids_fail_the_load() {
    let (loader, repository) = make_loader().await;
    let duplicated = "\
id,first_name,last_name,age,gender,location,clubs,friends
1,Ana,Lima,30,Female,Porto,[],[]
1,Bo,Chen,31,Male,Lisbon,[],[]
";
    let result = loader.load_reader(duplicated.as_bytes()).await;
    assert!(matches!(result, Err(LoaderError::Repository(_))));
    assert_eq!(repository.stats().await.unwrap().persons, 0);
}

#[tokio::test]
async fn test_reloading_same_csv_is_idempotent() {
    let (loader, repository) = make_loader().await;
    let first = loader.load_reader(SCENARIO_CSV.as_bytes()).await.unwrap();
    let second = loader.load_reader(SCENARIO_CSV.as_bytes()).await.unwrap();

    assert_eq!(first, second);
    let friends = repository.get_friends_of("John Rocha").await.unwrap();
    assert_eq!(names(&friends), vec!["Amanda Norris"]);
}
