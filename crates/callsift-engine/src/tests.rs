//! Integration tests for the extraction engine

#[cfg(test)]
mod tests {
    use crate::{Engine, EngineConfig};
    use callsift_domain::{RequirementField, Token};
    use callsift_nlp::{HeuristicTokenizer, MockTokenizer};

    fn default_engine() -> Engine<HeuristicTokenizer> {
        Engine::new(HeuristicTokenizer::new(), EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_full_extraction_flow() {
        let engine = default_engine();
        let transcript = "Customer: I want a Red hatchback, diesel, automatic, \
                          made in 2018, driven about 45000 km. \
                          Seller: We offer a 5-Day Money Back Guarantee. \
                          Customer: the wait time was too long and the price is high.";

        let record = engine.process(transcript).unwrap();
        let requirements = &record.customer_requirements;

        assert_eq!(requirements.car_type.as_deref(), Some("hatchback"));
        assert_eq!(requirements.fuel_type.as_deref(), Some("diesel"));
        assert_eq!(requirements.color.as_deref(), Some("Red"));
        assert_eq!(requirements.distance_travelled.as_deref(), Some("45000 km"));
        assert_eq!(requirements.make_year.as_deref(), Some("2018"));
        assert_eq!(requirements.transmission_type.as_deref(), Some("automatic"));

        assert!(record.company_policies.money_back_guarantee);
        assert!(record.customer_objections.experience_issues);
        assert!(record.customer_objections.price_issues);

        assert_eq!(record.accuracy, 100.0);
    }

    #[test]
    fn test_determinism() {
        let engine = default_engine();
        let transcript = "a blue SUV, petrol, manual, 2015, driven 30000 km";

        let first = engine.process(transcript).unwrap();
        let second = engine.process(transcript).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_schema_completeness() {
        let engine = default_engine();
        let record = engine.process("nothing recognizable here").unwrap();
        let json = serde_json::to_value(&record).unwrap();

        let requirements = json["customer_requirements"].as_object().unwrap();
        assert_eq!(requirements.len(), 6);
        for field in RequirementField::ALL {
            assert!(requirements.contains_key(field.as_str()));
        }

        let policies = json["company_policies"].as_object().unwrap();
        assert_eq!(policies.len(), 4);

        let objections = json["customer_objections"].as_object().unwrap();
        assert_eq!(objections.len(), 4);

        assert!(json["accuracy"].is_number());
    }

    #[test]
    fn test_accuracy_formula() {
        let engine = default_engine();

        // car_type + fuel_type = 2 of 6 fields
        let record = engine.process("hatchback diesel").unwrap();
        assert_eq!(record.accuracy, 33.33);
        assert!(record.accuracy >= 0.0 && record.accuracy <= 100.0);

        // + transmission + color = 4 of 6
        let record = engine.process("a black manual hatchback, diesel").unwrap();
        assert_eq!(record.accuracy, 66.67);
    }

    #[test]
    fn test_year_window_boundaries() {
        let engine = default_engine();

        assert_eq!(
            engine.process("made in 1990").unwrap().customer_requirements.make_year,
            None
        );
        assert_eq!(
            engine
                .process("made in 1991")
                .unwrap()
                .customer_requirements
                .make_year
                .as_deref(),
            Some("1991")
        );
        assert_eq!(
            engine
                .process("made in 2024")
                .unwrap()
                .customer_requirements
                .make_year
                .as_deref(),
            Some("2024")
        );
        assert_eq!(
            engine.process("made in 2025").unwrap().customer_requirements.make_year,
            None
        );
        // Digit-only but far outside the window
        assert_eq!(
            engine.process("made in 1850").unwrap().customer_requirements.make_year,
            None
        );
    }

    #[test]
    fn test_priority_order() {
        let engine = default_engine();
        let record = engine.process("hatchback diesel").unwrap();

        assert_eq!(
            record.customer_requirements.car_type.as_deref(),
            Some("hatchback")
        );
        assert_eq!(
            record.customer_requirements.fuel_type.as_deref(),
            Some("diesel")
        );
    }

    #[test]
    fn test_priority_order_with_overlapping_taxonomies() {
        // A value listed in both taxonomies must classify as car_type,
        // because the car_type rule is tested first.
        let mut config = EngineConfig::default();
        config.car_types.push("crossover".to_string());
        config.fuel_types.push("crossover".to_string());

        let engine = Engine::new(HeuristicTokenizer::new(), config).unwrap();
        let record = engine.process("a crossover please").unwrap();

        assert_eq!(
            record.customer_requirements.car_type.as_deref(),
            Some("crossover")
        );
        assert_eq!(record.customer_requirements.fuel_type, None);
    }

    #[test]
    fn test_color_scenario() {
        let engine = default_engine();
        let record = engine.process("I want a Red hatchback").unwrap();

        assert_eq!(record.customer_requirements.color.as_deref(), Some("Red"));
        assert_eq!(
            record.customer_requirements.car_type.as_deref(),
            Some("hatchback")
        );
    }

    #[test]
    fn test_distance_scenario_with_reported_head() {
        // Exercise the head contract directly: the tokenizer reports "km"
        // as the head of "45000".
        let text = "driven about 45000 km already";
        let mut tokenizer = MockTokenizer::new();
        tokenizer.add_response(
            text,
            vec![
                Token::with_numeric_flag("driven", false, "driven"),
                Token::with_numeric_flag("about", false, "45000"),
                Token::with_numeric_flag("45000", true, "km"),
                Token::with_numeric_flag("km", false, "driven"),
                Token::with_numeric_flag("already", false, "driven"),
            ],
        );

        let engine = Engine::new(tokenizer, EngineConfig::default()).unwrap();
        let record = engine.process(text).unwrap();

        assert_eq!(
            record.customer_requirements.distance_travelled.as_deref(),
            Some("45000 km")
        );
    }

    #[test]
    fn test_policy_case_sensitivity() {
        let engine = default_engine();

        let exact = engine
            .process("We offer a 5-Day Money Back Guarantee")
            .unwrap();
        assert!(exact.company_policies.money_back_guarantee);

        let wrong_case = engine.process("We offer a Money back guarantee").unwrap();
        assert!(!wrong_case.company_policies.money_back_guarantee);
    }

    #[test]
    fn test_objection_scenario() {
        let engine = default_engine();
        let record = engine.process("the wait time was too long").unwrap();

        assert!(record.customer_objections.experience_issues);
        assert!(!record.customer_objections.refurbishment_quality);
        assert!(!record.customer_objections.car_issues);
        assert!(!record.customer_objections.price_issues);
    }

    #[test]
    fn test_last_write_wins_overwrite() {
        let engine = default_engine();
        let record = engine
            .process("first a petrol sedan, no, make that a diesel suv")
            .unwrap();

        assert_eq!(
            record.customer_requirements.fuel_type.as_deref(),
            Some("diesel")
        );
        assert_eq!(record.customer_requirements.car_type.as_deref(), Some("suv"));
    }

    #[test]
    fn test_extended_vocabulary_from_toml() {
        let config = EngineConfig::from_toml(
            r#"
            car_types = ["hatchback", "suv", "sedan", "coupe"]
            fuel_types = ["petrol", "diesel"]
            transmission_types = ["manual", "automatic", "amt"]
            colors = ["red", "teal"]
            "#,
        )
        .unwrap();

        let engine = Engine::new(HeuristicTokenizer::new(), config).unwrap();
        let record = engine.process("a Teal coupe with AMT").unwrap();

        assert_eq!(record.customer_requirements.car_type.as_deref(), Some("coupe"));
        assert_eq!(record.customer_requirements.color.as_deref(), Some("Teal"));
        assert_eq!(
            record.customer_requirements.transmission_type.as_deref(),
            Some("AMT")
        );
    }

    #[test]
    fn test_whitespace_only_transcript() {
        let engine = default_engine();
        let record = engine.process("   \n\t  ").unwrap();

        assert_eq!(record.customer_requirements.populated_count(), 0);
        assert_eq!(record.accuracy, 0.0);
        assert_eq!(record.company_policies, Default::default());
        assert_eq!(record.customer_objections, Default::default());
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        use std::sync::Arc;

        let engine = Arc::new(default_engine());
        let transcript = "a green sedan, hybrid, automatic";
        let expected = engine.process(transcript).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                let expected = expected.clone();
                std::thread::spawn(move || {
                    assert_eq!(engine.process(transcript).unwrap(), expected);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
