mod helpers;
mod shopping_list_test;
mod subscription_test;
