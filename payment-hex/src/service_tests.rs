//! PaymentService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use payment_types::{
        CreatePaymentRequest, Payment, PaymentId, PaymentRepository, RepoError, ServiceError,
        UpdatePaymentRequest,
    };

    use crate::PaymentService;

    /// Simple in-memory repository for testing the service layer.
    pub struct MockRepo {
        payments: Mutex<BTreeMap<i64, Payment>>,
        next_id: Mutex<i64>,
        fail: bool,
    }

    impl MockRepo {
        pub fn new() -> Self {
            Self {
                payments: Mutex::new(BTreeMap::new()),
                next_id: Mutex::new(1),
                fail: false,
            }
        }

        /// A repository whose every operation fails at the database layer.
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }

        fn check(&self) -> Result<(), RepoError> {
            if self.fail {
                return Err(RepoError::Database("mock repository failure".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PaymentRepository for MockRepo {
        async fn insert(&self, req: CreatePaymentRequest) -> Result<Payment, RepoError> {
            self.check()?;
            let mut payments = self.payments.lock().unwrap();
            if payments
                .values()
                .any(|p| p.number_card == req.number_card)
            {
                return Err(RepoError::Conflict(format!(
                    "payment already exists for card {}",
                    req.number_card
                )));
            }

            let mut next_id = self.next_id.lock().unwrap();
            let id = PaymentId::from_i64(*next_id);
            *next_id += 1;

            let payment =
                Payment::from_parts(id, req.number_card, req.amount, chrono::Utc::now());
            payments.insert(id.as_i64(), payment.clone());
            Ok(payment)
        }

        async fn find_by_id(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
            self.check()?;
            Ok(self.payments.lock().unwrap().get(&id.as_i64()).cloned())
        }

        async fn update(&self, req: UpdatePaymentRequest) -> Result<Option<Payment>, RepoError> {
            self.check()?;
            let mut payments = self.payments.lock().unwrap();
            let Some(payment) = payments.get_mut(&req.id.as_i64()) else {
                return Ok(None);
            };
            if let Some(number_card) = req.number_card {
                payment.number_card = number_card;
            }
            if let Some(amount) = req.amount {
                payment.amount = amount;
            }
            Ok(Some(payment.clone()))
        }

        async fn list(&self) -> Result<Vec<Payment>, RepoError> {
            self.check()?;
            Ok(self.payments.lock().unwrap().values().cloned().collect())
        }

        async fn delete(&self, id: PaymentId) -> Result<u64, RepoError> {
            self.check()?;
            match self.payments.lock().unwrap().remove(&id.as_i64()) {
                Some(_) => Ok(1),
                None => Ok(0),
            }
        }
    }

    fn service() -> PaymentService<MockRepo> {
        PaymentService::new(MockRepo::new())
    }

    #[tokio::test]
    async fn create_parses_body_and_stores() {
        let svc = service();

        let payment = svc
            .create(br#"{"numberCard":"123","amount":500}"#)
            .await
            .unwrap();

        assert_eq!(payment.number_card, "123");
        assert_eq!(payment.amount, 500);
    }

    #[tokio::test]
    async fn create_defaults_amount_to_zero() {
        let svc = service();

        let payment = svc.create(br#"{"numberCard":"123"}"#).await.unwrap();

        assert_eq!(payment.amount, 0);
    }

    #[tokio::test]
    async fn create_rejects_malformed_body() {
        let svc = service();

        let err = svc.create(b"not json at all").await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_non_digit_card() {
        let svc = service();

        let err = svc
            .create(br#"{"numberCard":"12-34"}"#)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn create_rejects_negative_amount() {
        let svc = service();

        let err = svc
            .create(br#"{"numberCard":"123","amount":-1}"#)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn create_duplicate_card_is_already_exists() {
        let svc = service();
        svc.create(br#"{"numberCard":"123"}"#).await.unwrap();

        let err = svc.create(br#"{"numberCard":"123"}"#).await.unwrap_err();

        assert!(matches!(err, ServiceError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn get_by_id_rejects_non_numeric_id() {
        let svc = service();

        let err = svc.get_by_id("abc").await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn get_by_id_absent_is_none_not_error() {
        let svc = service();

        let found = svc.get_by_id("999").await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn get_by_id_returns_stored_record() {
        let svc = service();
        let created = svc.create(br#"{"numberCard":"123"}"#).await.unwrap();

        let found = svc
            .get_by_id(&created.id.to_string())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.number_card, "123");
    }

    #[tokio::test]
    async fn update_absent_is_none_not_error() {
        let svc = service();

        let updated = svc
            .update(br#"{"id":999,"amount":100}"#)
            .await
            .unwrap();

        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn update_applies_partial_changes() {
        let svc = service();
        let created = svc
            .create(br#"{"numberCard":"123","amount":500}"#)
            .await
            .unwrap();

        let body = format!(r#"{{"id":{},"amount":900}}"#, created.id);
        let updated = svc.update(body.as_bytes()).await.unwrap().unwrap();

        assert_eq!(updated.amount, 900);
        assert_eq!(updated.number_card, "123");
    }

    #[tokio::test]
    async fn update_rejects_malformed_body() {
        let svc = service();

        let err = svc.update(b"{").await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn list_empty_returns_empty_vec() {
        let svc = service();

        let payments = svc.list().await.unwrap();

        assert!(payments.is_empty());
    }

    #[tokio::test]
    async fn delete_reports_affected_count() {
        let svc = service();
        let created = svc.create(br#"{"numberCard":"123"}"#).await.unwrap();
        let id = created.id.to_string();

        assert_eq!(svc.delete(&id).await.unwrap(), 1);
        assert_eq!(svc.delete(&id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_rejects_non_numeric_id() {
        let svc = service();

        let err = svc.delete("abc").await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn repo_failure_surfaces_as_internal() {
        let svc = PaymentService::new(MockRepo::failing());

        let err = svc.list().await.unwrap_err();

        assert!(matches!(err, ServiceError::Internal(_)));
    }
}
