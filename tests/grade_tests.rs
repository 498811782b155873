// Scénarios d'attribution de note
mod common;

use std::sync::Arc;

use common::{factory, services, Services};
use scolarite_platform::{AppError, InMemoryRepositoryFactory, RepositoryFactory, Student};

/// Étudiant inscrit dans un parcours qui enseigne une UE, construit uniquement
/// via les cas d'utilisation publics. Renvoie (id étudiant, id UE, id parcours).
async fn seed_student_in_track(svc: &Services) -> (i64, i64, i64) {
    let track = svc.tracks.create("Informatique", 2024).await.unwrap();
    let unit = svc
        .course_units
        .create("UE001", "Programmation Rust")
        .await
        .unwrap();
    let student = svc
        .students
        .create("E001", "Dupont", "Jean", "jean.dupont@example.com")
        .await
        .unwrap();

    svc.tracks
        .add_course_unit_to_track(unit.id, track.id)
        .await
        .unwrap();
    svc.tracks
        .add_student_to_track(student.id, track.id)
        .await
        .unwrap();

    (student.id, unit.id, track.id)
}

#[tokio::test]
async fn attribue_une_note_valide() {
    let repos = factory();
    let svc = services(&repos);
    let (student_id, unit_id, _) = seed_student_in_track(&svc).await;

    let grade = svc
        .grades
        .add_grade_to_student(student_id, unit_id, 15.5)
        .await
        .unwrap();

    assert!(grade.id > 0);
    assert_eq!(grade.value, 15.5);
    assert_eq!(grade.student_id, student_id);
    assert_eq!(grade.course_unit_id, unit_id);
}

#[tokio::test]
async fn refuse_une_seconde_note_dans_la_meme_ue() {
    let repos = factory();
    let svc = services(&repos);
    let (student_id, unit_id, _) = seed_student_in_track(&svc).await;

    svc.grades
        .add_grade_to_student(student_id, unit_id, 15.5)
        .await
        .unwrap();

    let result = svc.grades.add_grade_to_student(student_id, unit_id, 12.0).await;
    assert!(matches!(result, Err(AppError::DuplicateGrade { .. })));
}

#[tokio::test]
async fn refuse_un_etudiant_sans_parcours() {
    let repos = factory();
    let svc = services(&repos);

    // UE enseignée dans un parcours, mais étudiant inscrit nulle part
    let track = svc.tracks.create("Informatique", 2024).await.unwrap();
    let unit = svc
        .course_units
        .create("UE001", "Programmation Rust")
        .await
        .unwrap();
    svc.tracks
        .add_course_unit_to_track(unit.id, track.id)
        .await
        .unwrap();
    let student = svc
        .students
        .create("E001", "Dupont", "Jean", "jean@example.com")
        .await
        .unwrap();

    let result = svc.grades.add_grade_to_student(student.id, unit.id, 15.5).await;
    assert!(matches!(
        result,
        Err(AppError::StudentNotInTrack(id)) if id == student.id
    ));
}

#[tokio::test]
async fn refuse_une_ue_hors_du_parcours_de_l_etudiant() {
    let repos = factory();
    let svc = services(&repos);
    let (student_id, _, _) = seed_student_in_track(&svc).await;

    // UE existante mais jamais ajoutée au parcours
    let other = svc
        .course_units
        .create("UE002", "Bases de données")
        .await
        .unwrap();

    let result = svc.grades.add_grade_to_student(student_id, other.id, 15.5).await;
    assert!(matches!(
        result,
        Err(AppError::CourseUnitNotInTrack { course_unit_id, .. }) if course_unit_id == other.id
    ));
}

#[tokio::test]
async fn la_valeur_est_controlee_avant_les_lectures() {
    let repos = factory();
    let svc = services(&repos);

    // Étudiant inexistant ET valeur hors bornes : la valeur l'emporte
    let result = svc.grades.add_grade_to_student(9999, 9999, 25.0).await;
    assert!(matches!(result, Err(AppError::InvalidGradeValue(_))));
}

#[tokio::test]
async fn accepte_les_bornes_0_et_20() {
    let repos = factory();
    let svc = services(&repos);
    let (student_id, unit_id, track_id) = seed_student_in_track(&svc).await;

    let grade = svc
        .grades
        .add_grade_to_student(student_id, unit_id, 0.0)
        .await
        .unwrap();
    assert_eq!(grade.value, 0.0);

    // Deuxième UE du même parcours pour la borne haute
    let unit2 = svc.course_units.create("UE002", "Réseaux").await.unwrap();
    svc.tracks
        .add_course_unit_to_track(unit2.id, track_id)
        .await
        .unwrap();

    let grade = svc
        .grades
        .add_grade_to_student(student_id, unit2.id, 20.0)
        .await
        .unwrap();
    assert_eq!(grade.value, 20.0);
}

#[tokio::test]
async fn refuse_les_valeurs_hors_bornes() {
    let repos = factory();
    let svc = services(&repos);
    let (student_id, unit_id, _) = seed_student_in_track(&svc).await;

    let result = svc
        .grades
        .add_grade_to_student(student_id, unit_id, 20.0001)
        .await;
    assert!(matches!(result, Err(AppError::InvalidGradeValue(_))));

    let result = svc
        .grades
        .add_grade_to_student(student_id, unit_id, -0.0001)
        .await;
    assert!(matches!(result, Err(AppError::InvalidGradeValue(_))));

    let result = svc
        .grades
        .add_grade_to_student(student_id, unit_id, f32::NAN)
        .await;
    assert!(matches!(result, Err(AppError::InvalidGradeValue(_))));
}

#[tokio::test]
async fn refuse_des_identifiants_non_positifs() {
    let repos = factory();
    let svc = services(&repos);

    let result = svc.grades.add_grade_to_student(0, 1, 10.0).await;
    assert!(matches!(result, Err(AppError::InvalidArgument(_))));

    let result = svc.grades.add_grade_to_student(1, -1, 10.0).await;
    assert!(matches!(result, Err(AppError::InvalidArgument(_))));
}

#[tokio::test]
async fn refuse_un_etudiant_inconnu() {
    let repos = factory();
    let svc = services(&repos);

    let result = svc.grades.add_grade_to_student(42, 42, 10.0).await;
    assert!(matches!(result, Err(AppError::StudentNotFound(42))));
}

#[tokio::test]
async fn refuse_une_ue_inconnue() {
    let repos = factory();
    let svc = services(&repos);

    // L'absence d'UE est détectée avant l'absence de parcours
    let student = svc
        .students
        .create("E001", "Dupont", "Jean", "jean@example.com")
        .await
        .unwrap();

    let result = svc.grades.add_grade_to_student(student.id, 42, 10.0).await;
    assert!(matches!(result, Err(AppError::CourseUnitNotFound(42))));
}

#[tokio::test]
async fn refuse_une_reference_de_parcours_pendante() {
    let repos = factory();
    let svc = services(&repos);

    let unit = svc
        .course_units
        .create("UE001", "Programmation Rust")
        .await
        .unwrap();

    // Fiche committée en contournant le cas d'utilisation, avec un parcours inexistant
    let mut student = Student::new("E001", "Dupont", "Jean", "jean@example.com");
    student.track_id = Some(999);
    let student = seed_student(&repos, student).await;

    let result = svc.grades.add_grade_to_student(student.id, unit.id, 10.0).await;
    assert!(matches!(result, Err(AppError::TrackNotFound(999))));
}

#[tokio::test]
async fn aucune_ecriture_apres_un_echec_de_validation() {
    let repos = factory();
    let svc = services(&repos);
    let (student_id, _, _) = seed_student_in_track(&svc).await;

    let other = svc
        .course_units
        .create("UE002", "Bases de données")
        .await
        .unwrap();

    let result = svc.grades.add_grade_to_student(student_id, other.id, 15.5).await;
    assert!(result.is_err());

    repos.save_changes().await.unwrap();
    let found = repos
        .grades()
        .find_by_student_and_course_unit(student_id, other.id)
        .await
        .unwrap();
    assert!(found.is_empty());
}

async fn seed_student(repos: &Arc<InMemoryRepositoryFactory>, student: Student) -> Student {
    let created = repos.students().create(student).await.unwrap();
    repos.save_changes().await.unwrap();
    created
}
