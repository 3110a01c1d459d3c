mod router_tests;
mod widget_tests;
