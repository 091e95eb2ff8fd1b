use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::protected_route::ProtectedRoute;
use crate::pages::admin::AdminPage;
use crate::pages::change_password::ChangePasswordPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::feed::FeedPage;
use crate::pages::file_upload::FileUploadPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::security_info::SecurityInfoPage;
use crate::pages::signup::SignupPage;
use crate::session;

#[component]
pub fn App() -> impl IntoView {
    session::provide_session();

    view! {
        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/feed") view=FeedPage/>
                <Route path=path!("/file-upload") view=FileUploadPage/>
                <Route path=path!("/security-info") view=SecurityInfoPage/>
                <Route
                    path=path!("/dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=path!("/change-password")
                    view=|| view! { <ProtectedRoute><ChangePasswordPage/></ProtectedRoute> }
                />
                <Route
                    path=path!("/admin")
                    view=|| view! { <ProtectedRoute><AdminPage/></ProtectedRoute> }
                />
                <Route
                    path=path!("/profile")
                    view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
