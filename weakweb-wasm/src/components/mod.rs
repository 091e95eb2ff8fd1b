pub(crate) mod layout;
pub(crate) mod post_form;
pub(crate) mod post_list;
pub(crate) mod protected_route;
