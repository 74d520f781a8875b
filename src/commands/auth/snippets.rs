//! File contents written by `craft auth`.

/// Routes appended to `routes/web.py`.
pub(super) const AUTH_ROUTES: &str = "
ROUTES = ROUTES + [
    Get().route('/login', 'LoginController@show'),
    Get().route('/logout', 'LoginController@logout'),
    Post().route('/login', 'LoginController@store'),
    Get().route('/register', 'RegisterController@show'),
    Post().route('/register', 'RegisterController@store'),
    Get().route('/home', 'HomeController@show'),
]
";

/// Marker used to detect routes that were already appended.
pub(super) const AUTH_ROUTES_MARKER: &str = "'LoginController@show'";

pub(super) const LOGIN_CONTROLLER: &str = "''' A Login Controller '''
from masonite.auth import Auth
from masonite.request import Request
from masonite.view import view


class LoginController(object):
    ''' Login and logout users '''

    def show(self, request: Request):
        if request.user():
            return request.redirect('/home')
        return view('auth/login', {'app': request.app().make('Application'), 'Auth': Auth(request)})

    def store(self, request: Request):
        if Auth(request).login(request.input('username'), request.input('password')):
            return request.redirect('/home')
        return request.redirect('/login')

    def logout(self, request: Request):
        Auth(request).logout()
        return request.redirect('/login')
";

pub(super) const REGISTER_CONTROLLER: &str = "''' A Register Controller '''
import bcrypt
from masonite.auth import Auth
from masonite.request import Request
from masonite.view import view
from config import auth


class RegisterController(object):
    ''' Register new users '''

    def show(self, request: Request):
        return view('auth/register', {'app': request.app().make('Application'), 'Auth': Auth(request)})

    def store(self, request: Request):
        password = bytes(bcrypt.hashpw(bytes(request.input('password'), 'utf-8'), bcrypt.gensalt())).decode('utf-8')
        auth.AUTH['model'].create(
            name=request.input('username'),
            password=password,
            email=request.input('email'),
        )
        if Auth(request).login(request.input('username'), request.input('password')):
            return request.redirect('/home')
        return request.redirect('/register')
";

pub(super) const HOME_CONTROLLER: &str = "''' A Home Controller '''
from masonite.auth import Auth
from masonite.request import Request
from masonite.view import view


class HomeController(object):
    ''' Landing page for signed-in users '''

    def show(self, request: Request):
        if not Auth(request).user():
            request.redirect('/login')
        return view('auth/home', {'app': request.app().make('Application'), 'Auth': Auth(request)})
";

pub(super) const LOGIN_TEMPLATE: &str = "{% extends 'auth/base.html' %}
{% block content %}
<form action=\"/login\" method=\"POST\">
    {{ csrf_field|safe }}
    <input type=\"text\" name=\"username\" placeholder=\"Username\">
    <input type=\"password\" name=\"password\" placeholder=\"Password\">
    <button type=\"submit\">Login</button>
</form>
{% endblock %}
";

pub(super) const REGISTER_TEMPLATE: &str = "{% extends 'auth/base.html' %}
{% block content %}
<form action=\"/register\" method=\"POST\">
    {{ csrf_field|safe }}
    <input type=\"text\" name=\"username\" placeholder=\"Username\">
    <input type=\"email\" name=\"email\" placeholder=\"Email\">
    <input type=\"password\" name=\"password\" placeholder=\"Password\">
    <button type=\"submit\">Register</button>
</form>
{% endblock %}
";

pub(super) const HOME_TEMPLATE: &str = "{% extends 'auth/base.html' %}
{% block content %}
<p>Hello {{ Auth.user().name }}, you are logged in.</p>
<a href=\"/logout\">Logout</a>
{% endblock %}
";

pub(super) const BASE_TEMPLATE: &str = "<!DOCTYPE html>
<html>
<head>
    <title>{{ app.NAME }}</title>
</head>
<body>
    {% block content %}{% endblock %}
</body>
</html>
";
