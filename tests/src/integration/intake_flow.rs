//! # Intake Flow
//!
//! Drives the runtime the way the serving layer does: seed a store, rebuild
//! the indexes at startup, then feed events through `IntakeService` and check
//! every structure stays consistent with the store.
//!
//! ## Flow Tested:
//!
//! 1. **Store → Rebuild**: stored leads, products and customers populate the
//!    queue, duplicate index, price index and referral graph
//! 2. **Lead submission**: scoring, duplicate rejection, queue ordering
//! 3. **Catalog and referrals**: new records are searchable and traversable
//!    immediately, and survive a second rebuild

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bx_runtime::{
        rebuild, InMemoryRecordStore, IndexState, IntakeService, RecordStore, RuntimeConfig,
        RuntimeError, SeedData,
    };
    use shared_types::{Claim, Customer, Lead, LeadSource, LeadStage, Product, RiskLevel};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn stored_lead(name: &str, email: &str, score: u32) -> Lead {
        let mut lead = Lead::new(name, email);
        lead.score = score;
        lead
    }

    fn seed() -> SeedData {
        let alice = Customer::new("Alice Customer", "alice@example.com");
        let charlie = Customer::new("Charlie Customer", "charlie@example.com").referred_by(alice.id);

        SeedData {
            leads: vec![
                stored_lead("John Enterprise", "john@enterprise.com", 45),
                stored_lead("Jane Startup", "jane@startup.com", 100),
                stored_lead("Bob Direct", "bob@direct.com", 55),
            ],
            products: vec![
                Product::new("Laptop", "LAP-001", 1500.0),
                Product::new("Mouse", "MOU-001", 50.0),
                Product::new("Keyboard", "KEY-001", 150.0),
                Product::new("Monitor", "MON-001", 400.0),
            ],
            customers: vec![alice, charlie],
            ..SeedData::default()
        }
    }

    fn started_service(config: RuntimeConfig) -> IntakeService<InMemoryRecordStore> {
        let store = Arc::new(InMemoryRecordStore::from_seed(seed()).unwrap());
        let state = IndexState::new();
        rebuild(&*store, &state).unwrap();
        IntakeService::new(store, state, config)
    }

    fn queued_emails(service: &IntakeService<InMemoryRecordStore>) -> Vec<String> {
        service
            .lead_queue()
            .into_iter()
            .map(|(lead, _)| lead.email.clone())
            .collect()
    }

    // =============================================================================
    // STARTUP
    // =============================================================================

    #[test]
    fn test_startup_rebuild_orders_stored_leads() {
        let service = started_service(RuntimeConfig::default());
        assert_eq!(
            queued_emails(&service),
            vec!["john@enterprise.com", "bob@direct.com", "jane@startup.com"]
        );
    }

    #[test]
    fn test_stored_emails_block_resubmission() {
        let service = started_service(RuntimeConfig::default());
        let err = service
            .submit_lead(Lead::new("John Again", "john@enterprise.com"))
            .unwrap_err();
        assert!(matches!(err, RuntimeError::DuplicateLead { .. }));
        assert_eq!(service.store().leads().unwrap().len(), 3);
    }

    // =============================================================================
    // LEAD SUBMISSION
    // =============================================================================

    #[test]
    fn test_new_lead_is_ranked_among_stored_ones() {
        let service = started_service(RuntimeConfig::default());

        let admission = service
            .submit_lead(
                Lead::new("Mid Referral", "mid@referral.com")
                    .with_source(LeadSource::Referral)
                    .with_budget(20_000.0),
            )
            .unwrap();
        assert_eq!(admission.lead.score, 55);
        assert_eq!(admission.queue_size, 4);

        let scores: Vec<u32> = service.lead_queue().iter().map(|(_, s)| *s).collect();
        assert_eq!(scores, vec![45, 55, 55, 100]);
        assert_eq!(service.next_lead().unwrap().email, "john@enterprise.com");
    }

    #[test]
    fn test_drained_queue_keeps_duplicate_guard() {
        let service = started_service(RuntimeConfig::default());
        while service.next_lead().is_ok() {}

        assert!(service.lead_queue().is_empty());
        assert!(service
            .submit_lead(Lead::new("Jane", "jane@startup.com"))
            .is_err());
    }

    #[test]
    fn test_stage_changes_survive_rebuild() {
        let service = started_service(RuntimeConfig::default());
        let john = service.peek_lead().unwrap();
        service.advance_lead(john.id, LeadStage::Won).unwrap();

        rebuild(&**service.store(), service.state()).unwrap();
        assert_eq!(service.peek_lead().unwrap().stage, LeadStage::Won);
    }

    // =============================================================================
    // CATALOG, REFERRALS, CLAIMS
    // =============================================================================

    #[test]
    fn test_registered_records_survive_rebuild() {
        let service = started_service(RuntimeConfig::default());
        let alice = service.top_referrers()[0].vertex;

        let dana = service
            .register_customer(Customer::new("Dana", "dana@example.com").referred_by(alice))
            .unwrap();
        service
            .register_product(Product::new("Webcam", "CAM-001", 90.0))
            .unwrap();

        let before_reach = service.referral_reach(alice);
        let before_search = service.search_products(Some(50.0), Some(150.0));
        assert_eq!(before_reach.len(), 3);
        assert!(before_reach.contains(&dana));
        assert_eq!(before_search.len(), 3);

        let report = rebuild(&**service.store(), service.state()).unwrap();
        assert_eq!(report.referral_edges, 2);
        assert_eq!(service.referral_reach(alice), before_reach);
        assert_eq!(
            service.search_products(Some(50.0), Some(150.0)),
            before_search
        );
    }

    #[test]
    fn test_configured_search_bounds_apply() {
        let mut config = RuntimeConfig::default();
        config.search.default_max_price = 400.0;
        let service = started_service(config);

        let names: Vec<String> = service
            .search_products(None, None)
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, vec!["Mouse", "Keyboard", "Monitor"]);
    }

    #[test]
    fn test_configured_referrer_limit_applies() {
        let mut config = RuntimeConfig::default();
        config.referral.top_limit = 1;
        let service = started_service(config);
        assert_eq!(service.top_referrers().len(), 1);
        assert_eq!(service.top_referrers()[0].degree, 1);
    }

    #[test]
    fn test_claims_feed_dashboard() {
        let service = started_service(RuntimeConfig::default());
        let codes: Vec<String> = ["99213", "93000", "80053", "85025"]
            .iter()
            .map(|c| c.to_string())
            .collect();

        let high = service
            .assess_claim(Claim::new("Patient B", "Dr. Jones", 15_000.0, codes))
            .unwrap();
        let medium = service
            .assess_claim(Claim::new("Patient C", "Dr. Smith", 10_000.0, vec!["99213".into()]))
            .unwrap();
        assert_eq!(high.risk_level, RiskLevel::High);
        assert_eq!(medium.fraud_score, 35);
        assert_eq!(medium.risk_level, RiskLevel::Medium);

        let stats = service.dashboard().unwrap();
        assert_eq!(stats.total_leads, 3);
        assert_eq!(stats.total_customers, 2);
        assert_eq!(stats.total_claims, 2);
        assert_eq!(stats.high_risk_claims, 1);
        assert_eq!(stats.avg_fraud_score, 50.0);
        assert_eq!(stats.queue_size, 3);
    }
}
