use super::*;

fn toy_data() -> (Array2<f64>, Array1<i64>) {
    let x = array![[1.0, 2.0], [2.0, 3.0], [3.0, 4.0], [5.0, 6.0], [6.0, 7.0]];
    let y = array![0, 0, 0, 1, 1];
    (x, y)
}

#[test]
fn test_default() {
    let knn = KNN::default();
    assert_eq!(knn.get_k(), 5);
    assert!(!knn.is_fitted());
}

#[test]
fn test_fit_predict_toy() {
    let (x, y) = toy_data();
    let mut knn = KNN::new(3);
    knn.fit(x.view(), y.view()).unwrap();

    assert!(knn.is_fitted());
    let predictions = knn.predict(array![[1.5, 2.5], [5.5, 6.5]].view()).unwrap();
    assert_eq!(predictions, array![0, 1]);
}

#[test]
fn test_k_one_recovers_training_labels() {
    let (x, y) = toy_data();
    let predictions = KNN::new(1).fit_predict(x.view(), y.view(), x.view()).unwrap();
    assert_eq!(predictions, y);
}

#[test]
fn test_tie_goes_to_smallest_code() {
    let x = array![[0.0], [2.0]];
    let y = array![1, 0];
    let predictions = KNN::new(2)
        .fit_predict(x.view(), y.view(), array![[1.0]].view())
        .unwrap();
    assert_eq!(predictions, array![0]);
}

#[test]
fn test_fit_validation() {
    let (x, y) = toy_data();

    assert!(matches!(
        KNN::new(0).fit(x.view(), y.view()),
        Err(DataError::InputValidationError(_))
    ));
    assert!(matches!(
        KNN::new(6).fit(x.view(), y.view()),
        Err(DataError::InputValidationError(_))
    ));
    assert!(matches!(
        KNN::new(1).fit(x.view(), array![0, 1].view()),
        Err(DataError::InputValidationError(_))
    ));

    let with_nan = array![[1.0, f64::NAN], [2.0, 3.0]];
    assert!(matches!(
        KNN::new(1).fit(with_nan.view(), array![0, 1].view()),
        Err(DataError::InputValidationError(_))
    ));
}

#[test]
fn test_predict_validation() {
    let (x, y) = toy_data();

    assert!(matches!(
        KNN::new(3).predict(x.view()),
        Err(DataError::InputValidationError(_))
    ));

    let mut knn = KNN::new(3);
    knn.fit(x.view(), y.view()).unwrap();
    assert!(matches!(
        knn.predict(array![[1.0, 2.0, 3.0]].view()),
        Err(DataError::InputValidationError(_))
    ));
    assert!(matches!(
        knn.predict(Array2::<f64>::zeros((0, 2)).view()),
        Err(DataError::InputValidationError(_))
    ));
}
