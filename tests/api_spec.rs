use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use superhero_api::api::create_router;
use superhero_api::db::Database;
use superhero_api::models::*;

const DESCRIPTION: &str = "gives the wielder super-human strengths";

struct Fixture {
    server: TestServer,
    db: Database,
}

fn setup() -> Fixture {
    let db = Database::open_memory().expect("Failed to create database");
    db.migrate().expect("Failed to migrate");
    let app = create_router(db.clone());
    Fixture {
        server: TestServer::new(app).expect("Failed to create test server"),
        db,
    }
}

fn create_test_hero(db: &Database) -> Hero {
    db.create_hero(CreateHeroInput {
        name: "Kamala Khan".to_string(),
        super_name: "Ms. Marvel".to_string(),
    })
    .expect("Failed to create hero")
}

fn create_test_power(db: &Database, name: &str) -> Power {
    db.create_power(CreatePowerInput {
        name: name.to_string(),
        description: DESCRIPTION.to_string(),
    })
    .expect("Failed to create power")
}

fn validation_errors() -> Value {
    json!({ "errors": ["Validation errors"] })
}

mod heroes {
    use super::*;

    #[tokio::test]
    async fn returns_empty_list_when_no_heroes_exist() {
        let f = setup();

        let response = f.server.get("/heroes").await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn lists_heroes_without_powers() {
        let f = setup();
        let hero = create_test_hero(&f.db);
        let power = create_test_power(&f.db, "flight");
        f.db.create_hero_power(CreateHeroPowerInput::new("Strong", hero.id, power.id))
            .unwrap();

        let response = f.server.get("/heroes").await;

        response.assert_status_ok();
        response.assert_json(&json!([
            { "id": hero.id, "name": "Kamala Khan", "super_name": "Ms. Marvel" }
        ]));
    }

    #[tokio::test]
    async fn returns_hero_detail_with_powers() {
        let f = setup();
        let hero = create_test_hero(&f.db);
        let power = create_test_power(&f.db, "flight");
        f.db.create_hero_power(CreateHeroPowerInput::new("Average", hero.id, power.id))
            .unwrap();

        let response = f.server.get(&format!("/heroes/{}", hero.id)).await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "id": hero.id,
            "name": "Kamala Khan",
            "super_name": "Ms. Marvel",
            "powers": [
                { "id": power.id, "name": "flight", "description": DESCRIPTION }
            ]
        }));
    }

    #[tokio::test]
    async fn hero_detail_powers_carry_no_hero_back_reference() {
        let f = setup();
        let hero = create_test_hero(&f.db);
        let power = create_test_power(&f.db, "flight");
        f.db.create_hero_power(CreateHeroPowerInput::new("Weak", hero.id, power.id))
            .unwrap();

        let body: Value = f.server.get(&format!("/heroes/{}", hero.id)).await.json();

        for entry in body["powers"].as_array().unwrap() {
            assert!(entry.get("hero").is_none());
            assert!(entry.get("heroes").is_none());
            assert!(entry.get("hero_powers").is_none());
        }
    }

    #[tokio::test]
    async fn returns_404_for_unknown_hero() {
        let f = setup();

        let response = f.server.get("/heroes/999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "error": "Hero not found" }));
    }

    #[tokio::test]
    async fn returns_404_for_non_integer_id() {
        let f = setup();

        let response = f.server.get("/heroes/abc").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "error": "Hero not found" }));
    }
}

mod powers {
    use super::*;

    #[tokio::test]
    async fn lists_powers() {
        let f = setup();
        let flight = create_test_power(&f.db, "flight");
        let strength = create_test_power(&f.db, "super strength");

        let response = f.server.get("/powers").await;

        response.assert_status_ok();
        let powers: Vec<PowerSummary> = response.json();
        assert_eq!(powers.len(), 2);
        assert_eq!(powers[0].id, flight.id);
        assert_eq!(powers[1].id, strength.id);
    }

    #[tokio::test]
    async fn returns_power_by_id() {
        let f = setup();
        let power = create_test_power(&f.db, "flight");

        let response = f.server.get(&format!("/powers/{}", power.id)).await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "id": power.id,
            "name": "flight",
            "description": DESCRIPTION
        }));
    }

    #[tokio::test]
    async fn returns_404_for_unknown_power() {
        let f = setup();

        let response = f.server.get("/powers/999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "error": "Power not found" }));
    }
}

mod update_power {
    use super::*;

    #[tokio::test]
    async fn updates_description() {
        let f = setup();
        let power = create_test_power(&f.db, "flight");
        let description = "lets the wielder glide on thermal currents";

        let response = f
            .server
            .patch(&format!("/powers/{}", power.id))
            .json(&json!({ "description": description }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "id": power.id,
            "name": "flight",
            "description": description
        }));

        let stored = f.db.get_power(power.id).unwrap().unwrap();
        assert_eq!(stored.description, description);
    }

    #[tokio::test]
    async fn accepts_description_of_exactly_twenty_characters() {
        let f = setup();
        let power = create_test_power(&f.db, "flight");

        let response = f
            .server
            .patch(&format!("/powers/{}", power.id))
            .json(&json!({ "description": "a".repeat(20) }))
            .await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn rejects_description_of_nineteen_characters() {
        let f = setup();
        let power = create_test_power(&f.db, "flight");

        let response = f
            .server
            .patch(&format!("/powers/{}", power.id))
            .json(&json!({ "description": "a".repeat(19) }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&validation_errors());

        let stored = f.db.get_power(power.id).unwrap().unwrap();
        assert_eq!(stored.description, DESCRIPTION);
    }

    #[tokio::test]
    async fn missing_description_is_a_no_op() {
        let f = setup();
        let power = create_test_power(&f.db, "flight");

        let response = f
            .server
            .patch(&format!("/powers/{}", power.id))
            .json(&json!({}))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "id": power.id,
            "name": "flight",
            "description": DESCRIPTION
        }));
    }

    #[tokio::test]
    async fn null_description_is_a_no_op() {
        let f = setup();
        let power = create_test_power(&f.db, "flight");

        let response = f
            .server
            .patch(&format!("/powers/{}", power.id))
            .json(&json!({ "description": null }))
            .await;

        response.assert_status_ok();
        let body: PowerSummary = response.json();
        assert_eq!(body.description, DESCRIPTION);
    }

    #[tokio::test]
    async fn returns_404_for_unknown_power() {
        let f = setup();

        let response = f
            .server
            .patch("/powers/999")
            .json(&json!({ "description": DESCRIPTION }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "error": "Power not found" }));
    }

    #[tokio::test]
    async fn rejects_non_json_body() {
        let f = setup();
        let power = create_test_power(&f.db, "flight");

        let response = f
            .server
            .patch(&format!("/powers/{}", power.id))
            .text("description=flying")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&validation_errors());
    }
}

mod hero_powers {
    use super::*;

    #[tokio::test]
    async fn creates_link_and_returns_hero_detail() {
        let f = setup();
        let hero = create_test_hero(&f.db);
        let power = create_test_power(&f.db, "flight");

        let response = f
            .server
            .post("/hero_powers")
            .json(&json!({ "strength": "Strong", "power_id": power.id, "hero_id": hero.id }))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.assert_json(&json!({
            "id": hero.id,
            "name": "Kamala Khan",
            "super_name": "Ms. Marvel",
            "powers": [
                { "id": power.id, "name": "flight", "description": DESCRIPTION }
            ]
        }));
    }

    #[tokio::test]
    async fn created_power_appears_exactly_once_in_hero_detail() {
        let f = setup();
        let hero = create_test_hero(&f.db);
        let power = create_test_power(&f.db, "flight");

        f.server
            .post("/hero_powers")
            .json(&CreateHeroPowerInput::new("Weak", hero.id, power.id))
            .await
            .assert_status(StatusCode::CREATED);

        let detail: HeroDetail = f.server.get(&format!("/heroes/{}", hero.id)).await.json();
        let matches = detail.powers.iter().filter(|p| p.id == power.id).count();
        assert_eq!(matches, 1);
    }

    #[tokio::test]
    async fn returns_404_for_unknown_power() {
        let f = setup();
        let hero = create_test_hero(&f.db);

        let response = f
            .server
            .post("/hero_powers")
            .json(&json!({ "strength": "Strong", "power_id": 999, "hero_id": hero.id }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "error": "Hero or Power not found" }));
        assert_eq!(f.db.counts().unwrap().hero_powers, 0);
    }

    #[tokio::test]
    async fn returns_404_for_unknown_hero() {
        let f = setup();
        let power = create_test_power(&f.db, "flight");

        let response = f
            .server
            .post("/hero_powers")
            .json(&json!({ "strength": "Strong", "power_id": power.id, "hero_id": 999 }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "error": "Hero or Power not found" }));
    }

    #[tokio::test]
    async fn returns_404_when_ids_are_missing() {
        let f = setup();

        let response = f
            .server
            .post("/hero_powers")
            .json(&json!({ "strength": "Strong" }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rejects_invalid_strength() {
        let f = setup();
        let hero = create_test_hero(&f.db);
        let power = create_test_power(&f.db, "flight");

        for strength in ["strong", "Mighty", ""] {
            let response = f
                .server
                .post("/hero_powers")
                .json(&json!({ "strength": strength, "power_id": power.id, "hero_id": hero.id }))
                .await;

            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&validation_errors());
        }

        assert_eq!(f.db.counts().unwrap().hero_powers, 0);
    }

    #[tokio::test]
    async fn rejects_missing_strength() {
        let f = setup();
        let hero = create_test_hero(&f.db);
        let power = create_test_power(&f.db, "flight");

        let response = f
            .server
            .post("/hero_powers")
            .json(&json!({ "power_id": power.id, "hero_id": hero.id }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&validation_errors());
    }

    #[tokio::test]
    async fn rejects_mistyped_ids() {
        let f = setup();

        let response = f
            .server
            .post("/hero_powers")
            .json(&json!({ "strength": "Strong", "power_id": "one", "hero_id": 1 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&validation_errors());
    }
}
