mod common;

use canvas_api::{params::SectionParams, ApiError, RequestError};
use common::{mount, mount_not_found, mount_pages, setup};
use futures_util::{StreamExt, TryStreamExt};
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn test_get_course() {
    let (server, canvas) = setup().await;
    mount(
        &server,
        "GET",
        "courses/1",
        json!({
            "id": 1,
            "name": "Basic Course",
            "course_code": "TST1",
            "workflow_state": "available",
            "start_at": "2017-01-01T00:00:00Z"
        }),
    )
    .await;

    let course = canvas.get_course(1).await.unwrap();
    assert_eq!(1, course.id);
    assert_eq!(Some("TST1"), course.course_code.as_deref());
}

#[tokio::test]
async fn test_get_course_by_sis_id() {
    let (server, canvas) = setup().await;
    mount(
        &server,
        "GET",
        "courses/sis_course_id:test-sis-id",
        json!({"id": 1, "name": "Basic Course", "sis_course_id": "test-sis-id"}),
    )
    .await;

    let course = canvas.get_course_by_sis_id("test-sis-id").await.unwrap();
    assert_eq!(Some("test-sis-id"), course.sis_course_id.as_deref());
}

#[tokio::test]
async fn test_get_course_fail() {
    let (server, canvas) = setup().await;
    mount_not_found(&server, "courses/2").await;

    let err = canvas.get_course(2).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(
        err,
        RequestError::Api(ApiError::ResourceDoesNotExist { ref message })
            if message == "The specified resource does not exist."
    ));
}

#[tokio::test]
async fn test_get_courses() {
    let (server, canvas) = setup().await;
    mount_pages(
        &server,
        "GET",
        "courses",
        vec![
            json!([{"id": 1, "name": "Course 1"}, {"id": 2, "name": "Course 2"}]),
            json!([{"id": 3, "name": "Course 3"}, {"id": 4, "name": "Course 4"}]),
        ],
    )
    .await;

    let courses = canvas.get_courses().collect_all().await.unwrap();
    assert_eq!(
        vec![1, 2, 3, 4],
        courses.iter().map(|course| course.id).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_get_user() {
    let (server, canvas) = setup().await;
    mount(
        &server,
        "GET",
        "users/sis_login_id:SISLOGIN",
        json!({"id": 1, "name": "John Doe", "login_id": "SISLOGIN"}),
    )
    .await;

    let user = canvas
        .get_user("SISLOGIN", Some("sis_login_id"))
        .await
        .unwrap();
    assert_eq!(Some("SISLOGIN"), user.login_id.as_deref());
}

#[tokio::test]
async fn test_get_current_user() {
    let (server, canvas) = setup().await;
    mount(&server, "GET", "users/self", json!({"id": 1, "name": "John Doe"})).await;

    let user = canvas.get_current_user().await.unwrap();
    assert_eq!(1, user.id);
}

#[tokio::test]
async fn test_course_nicknames() {
    let (server, canvas) = setup().await;
    mount(
        &server,
        "GET",
        "users/self/course_nicknames",
        json!([
            {"course_id": 1, "name": "Basic Course", "nickname": "Basic"},
            {"course_id": 2, "name": "Advanced Course", "nickname": "Advanced"}
        ]),
    )
    .await;
    mount(
        &server,
        "GET",
        "users/self/course_nicknames/1",
        json!({"course_id": 1, "name": "Basic Course", "nickname": "Basic"}),
    )
    .await;

    let nicknames = canvas.get_course_nicknames().collect_all().await.unwrap();
    assert_eq!(2, nicknames.len());
    assert_eq!("Advanced (2)", nicknames[1].to_string());

    let nickname = canvas.get_course_nickname(1).await.unwrap();
    assert_eq!("Basic", nickname.nickname);
}

#[tokio::test]
async fn test_set_course_nickname() {
    let (server, canvas) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/users/self/course_nicknames/1"))
        .and(body_json(json!({"nickname": "My Course"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "course_id": 1,
            "name": "Basic Course",
            "nickname": "My Course"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let nickname = canvas.set_course_nickname(1, "My Course").await.unwrap();
    assert_eq!("My Course", nickname.nickname);
}

#[tokio::test]
async fn test_remove_course_nickname() {
    let (server, canvas) = setup().await;
    mount(
        &server,
        "GET",
        "users/self/course_nicknames/1",
        json!({"course_id": 1, "name": "Basic Course", "nickname": "Basic"}),
    )
    .await;
    mount(
        &server,
        "DELETE",
        "users/self/course_nicknames/1",
        json!({"course_id": 1, "name": "Basic Course", "nickname": "Basic"}),
    )
    .await;

    let nickname = canvas.get_course_nickname(1).await.unwrap();
    let removed = nickname.remove(&canvas).await.unwrap();
    assert_eq!(1, removed.course_id);
}

#[tokio::test]
async fn test_clear_course_nicknames() {
    let (server, canvas) = setup().await;
    mount(
        &server,
        "DELETE",
        "users/self/course_nicknames",
        json!({"message": "OK"}),
    )
    .await;

    assert!(canvas.clear_course_nicknames().await.unwrap());
}

#[tokio::test]
async fn test_section_handle() {
    let (server, canvas) = setup().await;
    mount(
        &server,
        "GET",
        "sections/1",
        json!({"id": 1, "name": "Section 1", "course_id": 1}),
    )
    .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/sections/1"))
        .and(body_json(json!({"course_section": {"name": "Renamed"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "Renamed",
            "course_id": 1
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount(&server, "DELETE", "sections/1", json!({"id": 1, "name": "Renamed"})).await;

    let section = canvas.get_section(1).await.unwrap();
    assert_eq!(Some(1), section.course_id);

    let handle = canvas.section(1);
    let renamed = handle
        .edit(&SectionParams {
            name: Some("Renamed".to_string()),
            ..SectionParams::default()
        })
        .await
        .unwrap();
    assert_eq!(Some("Renamed"), renamed.name.as_deref());
    assert_eq!(1, handle.delete().await.unwrap().id);
}

#[tokio::test]
async fn test_invalid_access_token() {
    let (server, canvas) = setup().await;
    Mock::given(path("/api/v1/courses/1"))
        .respond_with(
            ResponseTemplate::new(401)
                .insert_header("WWW-Authenticate", "Bearer realm=\"canvas-lms\"")
                .set_body_json(json!({
                    "errors": [{"message": "Invalid access token."}]
                })),
        )
        .mount(&server)
        .await;
    Mock::given(path("/api/v1/courses/2"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": "unauthorized",
            "errors": [{"message": "user not authorized to perform that action"}]
        })))
        .mount(&server)
        .await;

    assert!(matches!(
        canvas.get_course(1).await,
        Err(RequestError::Api(ApiError::InvalidAccessToken { .. }))
    ));
    assert!(matches!(
        canvas.get_course(2).await,
        Err(RequestError::Api(ApiError::Unauthorized { .. }))
    ));
}

#[tokio::test]
async fn test_error_statuses() {
    let (server, canvas) = setup().await;
    for (id, status) in [(1, 400), (2, 403), (3, 409), (4, 500)] {
        Mock::given(path(format!("/api/v1/courses/{id}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
    }

    assert!(matches!(
        canvas.get_course(1).await,
        Err(RequestError::Api(ApiError::BadRequest { .. }))
    ));
    assert!(matches!(
        canvas.get_course(2).await,
        Err(RequestError::Api(ApiError::Forbidden { .. }))
    ));
    assert!(matches!(
        canvas.get_course(3).await,
        Err(RequestError::Api(ApiError::Conflict { .. }))
    ));
    match canvas.get_course(4).await {
        Err(RequestError::Api(ApiError::Other { status, .. })) => assert_eq!(500, status.as_u16()),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_response() {
    let (server, canvas) = setup().await;
    mount(&server, "GET", "courses/1", json!({"name": "No id"})).await;

    let err = canvas.get_course(1).await.unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
}

#[tokio::test]
async fn test_pagination_is_lazy() {
    let (server, canvas) = setup().await;
    let link = format!("<{}/api/v1/courses?page=2>; rel=\"next\"", server.uri());
    Mock::given(method("GET"))
        .and(path("/api/v1/courses"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link.as_str())
                .set_body_json(json!([{"id": 1}, {"id": 2}])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/courses"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 3}])))
        .with_priority(1)
        .mount(&server)
        .await;

    let courses = canvas.get_courses();
    assert!(server.received_requests().await.unwrap().is_empty());

    let first_two = courses.take(2).try_collect::<Vec<_>>().await.unwrap();
    assert_eq!(2, first_two.len());
    assert_eq!(1, server.received_requests().await.unwrap().len());
}

#[tokio::test]
async fn test_pagination_skips_empty_page() {
    let (server, canvas) = setup().await;
    mount_pages(
        &server,
        "GET",
        "courses",
        vec![json!([{"id": 1}]), json!([]), json!([{"id": 2}])],
    )
    .await;

    let courses = canvas.get_courses().collect_all().await.unwrap();
    assert_eq!(
        vec![1, 2],
        courses.iter().map(|course| course.id).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_pagination_error_ends_stream() {
    let (server, canvas) = setup().await;
    let link = format!("<{}/api/v1/courses?page=2>; rel=\"next\"", server.uri());
    Mock::given(method("GET"))
        .and(path("/api/v1/courses"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link.as_str())
                .set_body_json(json!([{"id": 1}])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/courses"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;

    let results = canvas.get_courses().collect::<Vec<_>>().await;
    assert_eq!(2, results.len());
    assert_eq!(1, results[0].as_ref().unwrap().id);
    assert!(matches!(
        results[1],
        Err(RequestError::Api(ApiError::Other { .. }))
    ));
}

#[tokio::test]
async fn test_sis_id_with_slash() {
    let (server, canvas) = setup().await;
    mount(
        &server,
        "GET",
        "courses/sis_course_id:2024%2FFALL%2FMATH",
        json!({"id": 1, "sis_course_id": "2024/FALL/MATH"}),
    )
    .await;

    let course = canvas.get_course_by_sis_id("2024/FALL/MATH").await.unwrap();
    assert_eq!(Some("2024/FALL/MATH"), course.sis_course_id.as_deref());
}

#[tokio::test]
async fn test_escaped_user_id() {
    let (server, canvas) = setup().await;
    mount(
        &server,
        "GET",
        "users/sis_login_id:j%2Edoe",
        json!({"id": 1, "login_id": "j.doe"}),
    )
    .await;

    let user = canvas
        .get_user("j%2Edoe", Some("sis_login_id"))
        .await
        .unwrap();
    assert_eq!(Some("j.doe"), user.login_id.as_deref());
}
